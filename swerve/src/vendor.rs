//! Vendor - engine prefixes and the property names they produce

/// Engine-specific prefix, in detection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Webkit,
    Moz,
    Ms,
    O,
}

impl Vendor {
    /// Fixed probing order
    pub const ALL: &[Self] = &[Self::Webkit, Self::Moz, Self::Ms, Self::O];

    /// Prefix as it appears on style-object keys (`WebkitTransform`)
    pub const fn dom_prefix(&self) -> &'static str {
        match self {
            Self::Webkit => "Webkit",
            Self::Moz => "Moz",
            Self::Ms => "ms",
            Self::O => "O",
        }
    }

    /// Prefix as it appears in CSS source (`-webkit-transform`)
    pub const fn css_prefix(&self) -> &'static str {
        match self {
            Self::Webkit => "-webkit-",
            Self::Moz => "-moz-",
            Self::Ms => "-ms-",
            Self::O => "-o-",
        }
    }

    /// `transform` -> `WebkitTransform`
    pub fn dom_name(&self, property: &str) -> String {
        let mut chars = property.chars();
        match chars.next() {
            Some(first) => format!("{}{}{}", self.dom_prefix(), first.to_uppercase(), chars.as_str()),
            None => self.dom_prefix().to_string(),
        }
    }

    /// `transform` -> `-webkit-transform`
    pub fn css_name(&self, property: &str) -> String {
        format!("{}{}", self.css_prefix(), property)
    }

    /// Name of the transition-completion event when transitions carry this prefix
    pub const fn transition_end_event(&self) -> &'static str {
        match self {
            Self::Webkit => "webkitTransitionEnd",
            Self::Moz => "transitionend",
            Self::Ms => "MSTransitionEnd",
            Self::O => "oTransitionEnd",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_capitalize_property() {
        assert_eq!(Vendor::Webkit.dom_name("transform"), "WebkitTransform");
        assert_eq!(Vendor::Ms.dom_name("transition"), "msTransition");
        assert_eq!(Vendor::O.dom_name("perspective"), "OPerspective");
    }

    #[test]
    fn css_names_use_dashed_prefix() {
        assert_eq!(Vendor::Moz.css_name("transform"), "-moz-transform");
        assert_eq!(Vendor::Ms.css_name("perspective"), "-ms-perspective");
    }

    #[test]
    fn probing_order_is_fixed() {
        assert_eq!(Vendor::ALL, &[Vendor::Webkit, Vendor::Moz, Vendor::Ms, Vendor::O]);
    }

    #[test]
    fn moz_uses_standard_event_name() {
        assert_eq!(Vendor::Moz.transition_end_event(), "transitionend");
        assert_eq!(Vendor::Webkit.transition_end_event(), "webkitTransitionEnd");
    }
}
