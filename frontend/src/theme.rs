/// Colour family of a page section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeColor {
    Teal,
    Orange,
    Purple,
    #[default]
    Neutral,
}

impl ThemeColor {
    pub fn accent_text_class(&self) -> &'static str {
        match self {
            ThemeColor::Teal => "text-teal-400",
            ThemeColor::Orange => "text-orange-500",
            ThemeColor::Purple => "text-purple-500",
            ThemeColor::Neutral => "text-white",
        }
    }

    pub fn tint_class(&self) -> &'static str {
        match self {
            ThemeColor::Teal => "bg-teal-900",
            ThemeColor::Orange => "bg-orange-900",
            ThemeColor::Purple => "bg-purple-900",
            ThemeColor::Neutral => "bg-black",
        }
    }

    pub fn button_classes(&self) -> &'static str {
        match self {
            ThemeColor::Teal => "hover:bg-teal-400 hover:text-black border-white text-black bg-white",
            ThemeColor::Orange => "hover:bg-orange-500 hover:text-black border-white text-black bg-white",
            ThemeColor::Purple => "hover:bg-purple-500 hover:text-white border-purple-500 text-white bg-purple-900/50",
            ThemeColor::Neutral => "bg-white text-black hover:bg-gray-200",
        }
    }

    // only the orange sections recolour the reel button on hover
    pub fn reel_hover_classes(&self) -> &'static str {
        match self {
            ThemeColor::Orange => "hover:border-orange-500 hover:text-orange-400",
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_is_the_default() {
        assert_eq!(ThemeColor::default(), ThemeColor::Neutral);
        assert_eq!(ThemeColor::default().accent_text_class(), "text-white");
    }

    #[test]
    fn each_theme_has_its_own_accent() {
        let accents = [
            ThemeColor::Teal.accent_text_class(),
            ThemeColor::Orange.accent_text_class(),
            ThemeColor::Purple.accent_text_class(),
            ThemeColor::Neutral.accent_text_class(),
        ];
        for (i, a) in accents.iter().enumerate() {
            for b in accents.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert!(ThemeColor::Teal.reel_hover_classes().is_empty());
        assert!(!ThemeColor::Orange.reel_hover_classes().is_empty());
    }
}
