//! Capability - which transform/transition properties the host understands
//!
//! Detection probes a style surface once and produces a read-only table.
//! The table is handed to every request explicitly; nothing is global.

use crate::transform::{Dimension, TransformFn};
use crate::vendor::Vendor;

/// Anything that can answer "does the style object know this key?"
pub trait StyleProbe {
    fn has_property(&self, dom_name: &str) -> bool;
}

/// Logical CSS feature being detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Transform,
    Transition,
    Perspective,
}

impl Feature {
    pub const ALL: &[Self] = &[Self::Transform, Self::Transition, Self::Perspective];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Transform => "transform",
            Self::Transition => "transition",
            Self::Perspective => "perspective",
        }
    }
}

/// A detected, possibly prefixed, style property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Key on the style object, e.g. `WebkitTransform`
    pub dom_name: String,
    /// CSS source text, e.g. `-webkit-transform`
    pub css_name: String,
    pub vendor: Option<Vendor>,
}

impl Property {
    pub fn unprefixed(feature: Feature) -> Self {
        Self {
            dom_name: feature.name().to_string(),
            css_name: feature.name().to_string(),
            vendor: None,
        }
    }

    pub fn prefixed(feature: Feature, vendor: Vendor) -> Self {
        Self {
            dom_name: vendor.dom_name(feature.name()),
            css_name: vendor.css_name(feature.name()),
            vendor: Some(vendor),
        }
    }
}

/// Detected capability table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    transform: Option<Property>,
    transition: Option<Property>,
    perspective: Option<Property>,
}

impl Capabilities {
    /// Nothing supported; every operation degrades to a no-op
    pub fn none() -> Self {
        Self::default()
    }

    /// Everything supported without prefixes
    pub fn standard() -> Self {
        Self {
            transform: Some(Property::unprefixed(Feature::Transform)),
            transition: Some(Property::unprefixed(Feature::Transition)),
            perspective: Some(Property::unprefixed(Feature::Perspective)),
        }
    }

    pub fn detect<P: StyleProbe + ?Sized>(probe: &P) -> Self {
        let mut caps = Self::none();
        for &feature in Feature::ALL {
            let found = detect_feature(probe, feature);
            match &found {
                Some(p) => tracing::debug!(feature = feature.name(), property = %p.css_name, "detected"),
                None => tracing::debug!(feature = feature.name(), "unsupported"),
            }
            *caps.slot_mut(feature) = found;
        }
        caps
    }

    fn slot_mut(&mut self, feature: Feature) -> &mut Option<Property> {
        match feature {
            Feature::Transform => &mut self.transform,
            Feature::Transition => &mut self.transition,
            Feature::Perspective => &mut self.perspective,
        }
    }

    pub fn with(mut self, feature: Feature, property: Option<Property>) -> Self {
        *self.slot_mut(feature) = property;
        self
    }

    pub fn property(&self, feature: Feature) -> Option<&Property> {
        match feature {
            Feature::Transform => self.transform.as_ref(),
            Feature::Transition => self.transition.as_ref(),
            Feature::Perspective => self.perspective.as_ref(),
        }
    }

    pub fn supports(&self, feature: Feature) -> bool {
        self.property(feature).is_some()
    }

    pub fn has_3d(&self) -> bool {
        self.supports(Feature::Perspective)
    }

    pub fn transition_end_event(&self) -> Option<&'static str> {
        self.transition.as_ref().map(|p| match p.vendor {
            Some(v) => v.transition_end_event(),
            None => "transitionend",
        })
    }

    /// 2-D functions need transforms, 3-D functions need perspective
    pub fn is_available(&self, f: TransformFn) -> bool {
        match f.dimension() {
            Dimension::TwoD => self.supports(Feature::Transform),
            Dimension::ThreeD => self.has_3d(),
        }
    }

    /// Function actually emitted for a call, after 3-D aliasing
    pub fn resolve(&self, f: TransformFn) -> Option<TransformFn> {
        if !self.is_available(f) {
            return None;
        }
        if self.has_3d() {
            return Some(match f {
                TransformFn::Translate => TransformFn::Translate3d,
                TransformFn::Scale => TransformFn::Scale3d,
                other => other,
            });
        }
        Some(f)
    }
}

fn detect_feature<P: StyleProbe + ?Sized>(probe: &P, feature: Feature) -> Option<Property> {
    if probe.has_property(feature.name()) {
        return Some(Property::unprefixed(feature));
    }
    Vendor::ALL
        .iter()
        .find(|v| probe.has_property(&v.dom_name(feature.name())))
        .map(|&v| Property::prefixed(feature, v))
}
