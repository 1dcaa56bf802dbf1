//! Request - chained transform/transition state for a set of nodes
//!
//! A `Swerve` collects transform fragments and transition settings,
//! then writes them onto every selected node in one `run`. Running
//! consumes the queued state and resets to the configured defaults.

use std::cell::RefCell;
use std::rc::Rc;

use crate::args::{Arg, parse_float};
use crate::capability::{Capabilities, Feature};
use crate::completion::PendingTransitions;
use crate::error::Result;
use crate::transform::TransformFn;

/// A styled element the request can write to
pub trait StyleNode: Sized {
    /// Handle that keeps a transition-end listener attached while alive
    type Listener;

    /// Set a style property by its CSS name
    fn set_style(&self, css_name: &str, value: &str) -> Result<()>;

    /// Inline value of a style property, `None` when unset
    fn style_value(&self, css_name: &str) -> Option<String>;

    fn parent(&self) -> Option<Self>;

    /// Forward `event`'s property names into `pending`, ignoring events
    /// bubbled up from descendants or pseudo-elements
    fn listen_transition_end(
        &self,
        event: &'static str,
        pending: Rc<RefCell<PendingTransitions>>,
    ) -> Result<Self::Listener>;
}

/// Initial values for every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub duration: String,
    pub delay: String,
    pub timing: String,
    pub perspective: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            duration: "0s".to_string(),
            delay: "0s".to_string(),
            timing: "linear".to_string(),
            perspective: "800px".to_string(),
        }
    }
}

pub struct Swerve<N: StyleNode> {
    caps: Rc<Capabilities>,
    nodes: Vec<N>,
    defaults: Defaults,
    transforms: Vec<String>,
    properties: Vec<(String, String)>,
    duration: String,
    delay: String,
    timing: String,
    perspective: Option<String>,
}

impl<N: StyleNode> Swerve<N> {
    pub fn new(caps: Rc<Capabilities>, nodes: Vec<N>) -> Self {
        Self::with_defaults(caps, nodes, Defaults::default())
    }

    pub fn with_defaults(caps: Rc<Capabilities>, nodes: Vec<N>, defaults: Defaults) -> Self {
        Self {
            caps,
            nodes,
            duration: defaults.duration.clone(),
            delay: defaults.delay.clone(),
            timing: defaults.timing.clone(),
            defaults,
            transforms: Vec::new(),
            properties: Vec::new(),
            perspective: None,
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.caps
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Fragments queued so far, in call order
    pub fn pending_transforms(&self) -> &[String] {
        &self.transforms
    }

    /// Queue an extra style property to transition alongside the transform.
    ///
    /// Use longhand names: browsers report `background-color`, never
    /// `background`, when a transition finishes.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.properties.push((name, value)),
        }
        self
    }

    /// Perspective applied to each node's parent on 3-D hosts
    pub fn perspective(&mut self, perspective: impl Into<String>) -> &mut Self {
        self.perspective = Some(perspective.into());
        self
    }

    pub fn duration(&mut self, duration: impl Into<String>) -> &mut Self {
        self.duration = duration.into();
        self
    }

    /// Any `transition-timing-function` value
    pub fn timing(&mut self, timing: impl Into<String>) -> &mut Self {
        self.timing = timing.into();
        self
    }

    pub fn delay(&mut self, delay: impl Into<String>) -> &mut Self {
        self.delay = delay.into();
        self
    }

    /// Queue one transform function. Dropped when the host can't render it.
    pub fn transform(&mut self, f: TransformFn, args: &[Arg]) -> &mut Self {
        match self.caps.resolve(f) {
            Some(resolved) if resolved == f => self.transforms.push(f.fragment(args)),
            Some(resolved) => {
                let padded = TransformFn::pad_alias(f, resolved, args);
                self.transforms.push(resolved.fragment(&padded));
            }
            None => tracing::debug!(function = f.name(), "transform unsupported, dropped"),
        }
        self
    }

    /// Queue a transform by its CSS function name
    pub fn transform_named(&mut self, name: &str, args: &[Arg]) -> Result<&mut Self> {
        let f: TransformFn = name.parse()?;
        Ok(self.transform(f, args))
    }

    /// Accumulated transform text, fragments separated by a space
    pub fn transform_text(&self) -> String {
        self.transforms.join(" ")
    }

    /// Transition shorthand covering the transform and every `set` property
    pub fn transition_text(&self) -> String {
        self.transitioned_names()
            .map(|name| format!("{} {} {} {}", name, self.duration, self.timing, self.delay))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn transitioned_names(&self) -> impl Iterator<Item = &str> {
        self.caps
            .property(Feature::Transform)
            .map(|p| p.css_name.as_str())
            .into_iter()
            .chain(self.properties.iter().map(|(n, _)| n.as_str()))
    }

    /// Whether a run can produce transition-end events at all
    fn expects_events(&self) -> bool {
        self.caps.supports(Feature::Transition) && !self.is_instant()
    }

    /// No transition event fires when both duration and delay are zero.
    /// Values that don't parse (`var(--d)`, `calc(..)`) are not zero.
    fn is_instant(&self) -> bool {
        let zero = |s: &str| parse_float(s) <= 0.0;
        zero(&self.duration) && zero(&self.delay)
    }

    /// Write the queued state onto every node, then reset
    pub fn run(&mut self) -> &mut Self {
        self.apply();
        self
    }

    /// Like `run`, invoking `callback` once every transitioned property on
    /// every node has finished. Keep the returned watch alive until then.
    pub fn run_then(
        &mut self,
        callback: impl FnOnce() + 'static,
    ) -> Result<TransitionWatch<N::Listener>> {
        let expects_events = self.expects_events();
        let changed = self.apply();
        let awaited = if expects_events { changed } else { Vec::new() };
        let pending = Rc::new(RefCell::new(PendingTransitions::new(awaited, callback)));

        // events are delivered on a later task, so attaching after the write is safe
        let mut listeners = Vec::new();
        if pending.borrow().remaining() > 0 {
            if let Some(event) = self.caps.transition_end_event() {
                for node in &self.nodes {
                    listeners.push(node.listen_transition_end(event, pending.clone())?);
                }
            }
        }

        pending.borrow_mut().fire_if_empty();
        Ok(TransitionWatch { listeners, pending })
    }

    /// Write everything, returning the transitioned properties whose inline
    /// value actually changed (one entry per node). Unchanged values never
    /// produce a transition-end event.
    fn apply(&mut self) -> Vec<String> {
        let perspective = self.caps.property(Feature::Perspective).map(|p| p.css_name.clone());
        let transition = self.caps.property(Feature::Transition).map(|p| p.css_name.clone());
        let transform = self.caps.property(Feature::Transform).map(|p| p.css_name.clone());

        let perspective_value = self
            .perspective
            .clone()
            .unwrap_or_else(|| self.defaults.perspective.clone());
        let transition_text = self.transition_text();
        let transform_text = self.transform_text();
        let mut changed = Vec::new();

        for node in &self.nodes {
            if let Some(name) = &perspective {
                match node.parent() {
                    Some(parent) => write_style(&parent, name, &perspective_value),
                    None => tracing::debug!("node has no parent, perspective skipped"),
                }
            }
            if let Some(name) = &transition {
                write_style(node, name, &transition_text);
            }
            if let Some(name) = &transform {
                if write_changed(node, name, &transform_text) {
                    changed.push(name.clone());
                }
            }
            for (name, value) in &self.properties {
                if write_changed(node, name, value) {
                    changed.push(name.clone());
                }
            }
        }

        tracing::debug!(nodes = self.nodes.len(), transform = %transform_text, "applied");
        self.reset();
        changed
    }

    fn reset(&mut self) {
        self.transforms.clear();
        self.properties.clear();
        self.duration = self.defaults.duration.clone();
        self.delay = self.defaults.delay.clone();
        self.timing = self.defaults.timing.clone();
        self.perspective = None;
    }
}

fn write_style<N: StyleNode>(node: &N, name: &str, value: &str) {
    if let Err(e) = node.set_style(name, value) {
        tracing::warn!(property = name, error = %e, "failed to set style");
    }
}

/// Write and report whether the serialized value differs from before
fn write_changed<N: StyleNode>(node: &N, name: &str, value: &str) -> bool {
    let before = node.style_value(name);
    write_style(node, name, value);
    node.style_value(name) != before
}

/// Keeps transition-end listeners attached until dropped
pub struct TransitionWatch<L> {
    listeners: Vec<L>,
    pending: Rc<RefCell<PendingTransitions>>,
}

impl<L> TransitionWatch<L> {
    /// Properties still in flight
    pub fn remaining(&self) -> usize {
        self.pending.borrow().remaining()
    }

    pub fn is_done(&self) -> bool {
        self.pending.borrow().is_done()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Leave the listeners attached for the lifetime of the page
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

macro_rules! transform_methods {
    ($($method:ident => $variant:ident($($arg:ident),*);)*) => {
        impl<N: StyleNode> Swerve<N> {
            $(
                pub fn $method(&mut self, $($arg: impl Into<Arg>),*) -> &mut Self {
                    self.transform(TransformFn::$variant, &[$($arg.into()),*])
                }
            )*
        }
    };
}

transform_methods! {
    matrix => Matrix(a, b, c, d, e, f);
    translate => Translate(x, y);
    translate_x => TranslateX(x);
    translate_y => TranslateY(y);
    scale => Scale(x, y);
    scale_x => ScaleX(x);
    scale_y => ScaleY(y);
    rotate => Rotate(angle);
    skew => Skew(x, y);
    skew_x => SkewX(angle);
    skew_y => SkewY(angle);
    matrix3d => Matrix3d(
        a1, b1, c1, d1,
        a2, b2, c2, d2,
        a3, b3, c3, d3,
        a4, b4, c4, d4
    );
    translate3d => Translate3d(x, y, z);
    translate_z => TranslateZ(z);
    scale3d => Scale3d(x, y, z);
    scale_z => ScaleZ(z);
    rotate3d => Rotate3d(x, y, z, angle);
    rotate_x => RotateX(angle);
    rotate_y => RotateY(angle);
    rotate_z => RotateZ(angle);
    perspective_depth => Perspective(length);
}
