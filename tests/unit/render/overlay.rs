//! Tests for bitmap digit labels

#[cfg(test)]
mod tests {
    use blobtile::io::configuration::LABEL_COLOR;
    use blobtile::manifest::Rect;
    use blobtile::render::overlay::{draw_label, label_dimensions, label_scale};
    use image::{Rgba, RgbaImage};

    // Tests glyph scale grows with tile size and never reaches zero
    // Verified by dropping the minimum of one
    #[test]
    fn test_label_scale() {
        assert_eq!(label_scale(8), 1);
        assert_eq!(label_scale(32), 2);
        assert_eq!(label_scale(64), 4);
    }

    // Tests label size counts digits and the gaps between them
    // Verified by omitting inter-glyph spacing
    #[test]
    fn test_label_dimensions() {
        assert_eq!(label_dimensions("7", 1), (3, 5));
        assert_eq!(label_dimensions("255", 1), (11, 5));
        assert_eq!(label_dimensions("255", 2), (22, 10));
        assert_eq!(label_dimensions("", 3), (0, 0));
    }

    // Tests a digit is drawn centred in its region
    // Verified by anchoring labels at the region origin
    #[test]
    fn test_draw_label_centred() {
        let white = Rgba([255, 255, 255, 255]);
        let mut image = RgbaImage::from_pixel(32, 32, white);
        draw_label(&mut image, Rect::new(0, 0, 32, 32), 1, 1);

        // "1" is three pixels wide and five tall, starting at (14, 13)
        assert_eq!(*image.get_pixel(15, 13), Rgba(LABEL_COLOR));
        assert_eq!(*image.get_pixel(14, 13), white);
        assert_eq!(*image.get_pixel(14, 17), Rgba(LABEL_COLOR));
        assert_eq!(*image.get_pixel(0, 0), white);

        let inked = image.pixels().filter(|p| **p == Rgba(LABEL_COLOR)).count();
        assert_eq!(inked, 8);
    }

    // Tests labels only touch pixels inside their region's tile
    // Verified by offsetting labels from the image origin
    #[test]
    fn test_draw_label_in_second_tile() {
        let mut image = RgbaImage::new(64, 32);
        draw_label(&mut image, Rect::new(32, 0, 32, 32), 42, 2);

        let left_inked = (0..32)
            .flat_map(|x| (0..32).map(move |y| (x, y)))
            .any(|(x, y)| *image.get_pixel(x, y) == Rgba(LABEL_COLOR));
        assert!(!left_inked);
        assert!(image.pixels().any(|p| *p == Rgba(LABEL_COLOR)));
    }

    // Tests labels wider than the image are clipped instead of panicking
    // Verified by writing pixels without bounds checks
    #[test]
    fn test_draw_label_clipped() {
        let mut image = RgbaImage::new(4, 4);
        draw_label(&mut image, Rect::new(0, 0, 4, 4), 255, 4);
        assert_eq!(image.dimensions(), (4, 4));
    }
}
