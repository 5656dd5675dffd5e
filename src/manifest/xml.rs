//! XML encoding of manifests
//!
//! ```xml
//! <Tileset>
//!   <Image>blob.png</Image>
//!   <Bits><TopLeft>1</TopLeft>...<Left>128</Left></Bits>
//!   <Tiles>
//!     <Tile>
//!       <Source><X>0</X><Y>0</Y><Width>32</Width><Height>32</Height></Source>
//!       <Indices><int>0</int><int>1</int>...</Indices>
//!     </Tile>
//!   </Tiles>
//! </Tileset>
//! ```

use crate::io::error::{Result, encoding_error, manifest_error, missing_section};
use crate::manifest::schema::{BitWeights, Manifest, Rect, TileRecord};
use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

const FORMAT: &str = "xml";

const BIT_NAMES: [&str; 8] = [
    "TopLeft",
    "Top",
    "TopRight",
    "Right",
    "BottomRight",
    "Bottom",
    "BottomLeft",
    "Left",
];

/// Parsed element: name, trimmed text content and child elements
#[derive(Debug, Default)]
struct Element {
    name: String,
    text: String,
    children: Vec<Element>,
}

impl Element {
    fn named(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Integer content, zero when missing or unparsable
    fn int_or_zero(&self, name: &str) -> u32 {
        self.child(name)
            .and_then(|child| child.text.trim().parse().ok())
            .unwrap_or(0)
    }
}

fn parse_tree(text: &str) -> Result<Element> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        let event = reader.read_event().map_err(|e| {
            encoding_error(
                FORMAT,
                &format!("{e} at position {}", reader.buffer_position()),
            )
        })?;

        match event {
            Event::Start(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                stack.push(Element::named(name));
            }
            Event::Empty(start) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                let element = Element::named(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Text(content) => {
                let content = content.unescape().map_err(|e| encoding_error(FORMAT, &e))?;
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&content);
                }
            }
            Event::CData(content) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&content));
                }
            }
            Event::End(_) => {
                let Some(mut element) = stack.pop() else {
                    return Err(encoding_error(FORMAT, &"unbalanced closing tag"));
                };
                element.text = element.text.trim().to_string();
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => return Ok(element),
                }
            }
            Event::Eof => {
                return Err(encoding_error(FORMAT, &"document has no complete root element"));
            }
            _ => {}
        }
    }
}

fn parse_bits(bits: &Element) -> BitWeights {
    BitWeights::new(BIT_NAMES.map(|name| bits.int_or_zero(name)))
}

fn parse_tile(position: usize, tile: &Element) -> Result<TileRecord> {
    let source = tile
        .child("Source")
        .ok_or_else(|| manifest_error(&format!("tile {position} has no Source element")))?;
    let indices = tile
        .child("Indices")
        .ok_or_else(|| manifest_error(&format!("tile {position} has no Indices element")))?;

    Ok(TileRecord {
        source: Rect::new(
            source.int_or_zero("X"),
            source.int_or_zero("Y"),
            source.int_or_zero("Width"),
            source.int_or_zero("Height"),
        ),
        indices: indices
            .children_named("int")
            .filter_map(|index| index.text.parse().ok())
            .collect(),
    })
}

/// Parse a `Tileset` document
///
/// Unparsable numbers in `Bits` and `Source` become zero and unparsable
/// `int` entries are skipped.
///
/// # Errors
///
/// Returns an encoding error for malformed XML and a manifest data error
/// naming the first missing element
pub fn from_str(text: &str) -> Result<Manifest> {
    let root = parse_tree(text)?;
    if root.name != "Tileset" {
        return Err(manifest_error(&"could not find Tileset root element"));
    }

    let image = root.child("Image").ok_or_else(|| missing_section("Image"))?;
    let bits = root.child("Bits").ok_or_else(|| missing_section("Bits"))?;
    let tiles = root.child("Tiles").ok_or_else(|| missing_section("Tiles"))?;

    let tiles = tiles
        .children
        .iter()
        .enumerate()
        .map(|(position, tile)| parse_tile(position, tile))
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest {
        image: image.text.clone(),
        bits: parse_bits(bits),
        tiles,
    })
}

struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn event(&mut self, event: Event<'_>) -> Result<()> {
        self.writer
            .write_event(event)
            .map_err(|e| encoding_error(FORMAT, &e))
    }

    fn open(&mut self, name: &str) -> Result<()> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn close(&mut self, name: &str) -> Result<()> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn leaf(&mut self, name: &str, text: &str) -> Result<()> {
        self.open(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.close(name)
    }
}

/// Serialize a manifest as a `Tileset` document, optionally indented
///
/// # Errors
///
/// Returns an encoding error if writing fails
pub fn to_string(manifest: &Manifest, pretty: bool) -> Result<String> {
    let writer = if pretty {
        Writer::new_with_indent(Vec::new(), b' ', 2)
    } else {
        Writer::new(Vec::new())
    };
    let mut out = XmlOut { writer };

    out.event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    out.open("Tileset")?;
    out.leaf("Image", &manifest.image)?;

    out.open("Bits")?;
    for (name, weight) in BIT_NAMES.iter().zip(manifest.bits.as_array()) {
        out.leaf(name, &weight.to_string())?;
    }
    out.close("Bits")?;

    out.open("Tiles")?;
    for tile in &manifest.tiles {
        out.open("Tile")?;
        out.open("Source")?;
        out.leaf("X", &tile.source.x.to_string())?;
        out.leaf("Y", &tile.source.y.to_string())?;
        out.leaf("Width", &tile.source.width.to_string())?;
        out.leaf("Height", &tile.source.height.to_string())?;
        out.close("Source")?;
        out.open("Indices")?;
        for index in &tile.indices {
            out.leaf("int", &index.to_string())?;
        }
        out.close("Indices")?;
        out.close("Tile")?;
    }
    out.close("Tiles")?;
    out.close("Tileset")?;

    String::from_utf8(out.writer.into_inner()).map_err(|e| encoding_error(FORMAT, &e))
}
