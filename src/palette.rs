use super::*;

/// Opaque colour from 8 bit channels
pub fn rgb(r: u8, g: u8, b: u8) -> Rgba<f32> {
    Rgba::<u8>::opaque(r, g, b).convert()
}

/// Segment colors, cycled by slice index
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgba<f32>>);

impl Palette {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Rgba<f32> {
        match self.0.len() {
            0 => Rgba::WHITE,
            len => self.0[index % len],
        }
    }

    pub fn choose(&self, rng: &mut impl Rng) -> Rgba<f32> {
        match self.0.len() {
            0 => Rgba::WHITE,
            len => self.get(rng.gen_range(0..len)),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            rgb(0xF4, 0x3F, 0x5E),
            rgb(0x8B, 0x5C, 0xF6),
            rgb(0x3B, 0x82, 0xF6),
            rgb(0x10, 0xB9, 0x81),
            rgb(0xF5, 0x9E, 0x0B),
            rgb(0xEF, 0x44, 0x44),
            rgb(0x63, 0x66, 0xF1),
            rgb(0xEC, 0x48, 0x99),
            rgb(0x14, 0xB8, 0xA6),
            rgb(0x84, 0xCC, 0x16),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_is_opaque() {
        let color = rgb(0xFF, 0x00, 0x33);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert!((color.b - 0.2).abs() < 1e-6);
        assert_eq!(color.a, 1.0);
    }

    #[test]
    fn cycles_by_index() {
        let palette = Palette::default();
        assert_eq!(palette.len(), 10);
        assert_eq!(palette.get(3), palette.get(13));
        assert_ne!(palette.get(0), palette.get(1));
    }

    #[test]
    fn empty_palette_falls_back_to_white() {
        let palette = Palette(Vec::new());
        assert!(palette.is_empty());
        assert_eq!(palette.get(7), Rgba::WHITE);
        assert_eq!(palette.choose(&mut StdRng::seed_from_u64(0)), Rgba::WHITE);
    }

    #[test]
    fn choose_stays_in_palette() {
        let palette = Palette::default();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let color = palette.choose(&mut rng);
            assert!((0..palette.len()).any(|i| palette.get(i) == color));
        }
    }
}
