//! Transform - CSS transform functions and their argument signatures
//!
//! One variant per function; the signature table replaces generating a
//! method per name at load time.

use std::fmt;
use std::str::FromStr;

use crate::args::{Arg, ArgKind};
use crate::error::SwerveError;

const N: ArgKind = ArgKind::Number;
const V: ArgKind = ArgKind::Length;
const A: ArgKind = ArgKind::Angle;

/// Whether a function needs 3-D support
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    TwoD,
    ThreeD,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformFn {
    // 2-D
    Matrix,
    Translate,
    TranslateX,
    TranslateY,
    Scale,
    ScaleX,
    ScaleY,
    Rotate,
    Skew,
    SkewX,
    SkewY,
    // 3-D
    Matrix3d,
    Translate3d,
    TranslateZ,
    Scale3d,
    ScaleZ,
    Rotate3d,
    RotateX,
    RotateY,
    RotateZ,
    Perspective,
}

impl TransformFn {
    pub const ALL: &[Self] = &[
        Self::Matrix,
        Self::Translate,
        Self::TranslateX,
        Self::TranslateY,
        Self::Scale,
        Self::ScaleX,
        Self::ScaleY,
        Self::Rotate,
        Self::Skew,
        Self::SkewX,
        Self::SkewY,
        Self::Matrix3d,
        Self::Translate3d,
        Self::TranslateZ,
        Self::Scale3d,
        Self::ScaleZ,
        Self::Rotate3d,
        Self::RotateX,
        Self::RotateY,
        Self::RotateZ,
        Self::Perspective,
    ];

    /// CSS function name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::Translate => "translate",
            Self::TranslateX => "translateX",
            Self::TranslateY => "translateY",
            Self::Scale => "scale",
            Self::ScaleX => "scaleX",
            Self::ScaleY => "scaleY",
            Self::Rotate => "rotate",
            Self::Skew => "skew",
            Self::SkewX => "skewX",
            Self::SkewY => "skewY",
            Self::Matrix3d => "matrix3d",
            Self::Translate3d => "translate3d",
            Self::TranslateZ => "translateZ",
            Self::Scale3d => "scale3d",
            Self::ScaleZ => "scaleZ",
            Self::Rotate3d => "rotate3d",
            Self::RotateX => "rotateX",
            Self::RotateY => "rotateY",
            Self::RotateZ => "rotateZ",
            Self::Perspective => "perspective",
        }
    }

    /// Positional argument kinds
    pub const fn signature(&self) -> &'static [ArgKind] {
        match self {
            Self::Matrix => &[N, N, N, N, N, N],
            Self::Translate => &[V, V],
            Self::TranslateX | Self::TranslateY | Self::TranslateZ => &[V],
            Self::Scale => &[N, N],
            Self::ScaleX | Self::ScaleY | Self::ScaleZ => &[N],
            Self::Rotate | Self::SkewX | Self::SkewY => &[A],
            Self::Skew => &[A, A],
            Self::Matrix3d => &[N, N, N, N, N, N, N, N, N, N, N, N, N, N, N, N],
            Self::Translate3d => &[V, V, V],
            Self::Scale3d => &[N, N, N],
            Self::Rotate3d => &[N, N, N, A],
            Self::RotateX | Self::RotateY | Self::RotateZ => &[A],
            Self::Perspective => &[V],
        }
    }

    pub const fn dimension(&self) -> Dimension {
        match self {
            Self::Matrix
            | Self::Translate
            | Self::TranslateX
            | Self::TranslateY
            | Self::Scale
            | Self::ScaleX
            | Self::ScaleY
            | Self::Rotate
            | Self::Skew
            | Self::SkewX
            | Self::SkewY => Dimension::TwoD,
            _ => Dimension::ThreeD,
        }
    }

    /// Render `name(a,b,...)` with every argument coerced to its kind
    pub fn fragment(&self, args: &[Arg]) -> String {
        let rendered: Vec<String> = self
            .signature()
            .iter()
            .enumerate()
            .map(|(i, kind)| kind.coerce(args.get(i)))
            .collect();
        format!("{}({})", self.name(), rendered.join(","))
    }

    /// Arguments for the 3-D form of an aliased 2-D call.
    ///
    /// The extra axis gets its identity value so `scale(2,3)` stays a
    /// 2-D scale instead of flattening z.
    pub(crate) fn pad_alias(from: Self, to: Self, args: &[Arg]) -> Vec<Arg> {
        let mut padded: Vec<Arg> = args.iter().take(from.signature().len()).cloned().collect();
        while padded.len() < from.signature().len() {
            padded.push(Arg::Number(0.0));
        }
        let identity = match to {
            Self::Scale3d => 1.0,
            _ => 0.0,
        };
        while padded.len() < to.signature().len() {
            padded.push(Arg::Number(identity));
        }
        padded
    }
}

impl fmt::Display for TransformFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransformFn {
    type Err = SwerveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| SwerveError::UnknownTransform { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragments_match_css_syntax() {
        assert_eq!(TransformFn::TranslateX.fragment(&[10.into()]), "translateX(10px)");
        assert_eq!(TransformFn::Rotate.fragment(&[45.into()]), "rotate(45deg)");
        assert_eq!(TransformFn::Scale.fragment(&[2.into(), 3.into()]), "scale(2,3)");
    }

    #[test]
    fn missing_arguments_fill_with_zero() {
        assert_eq!(
            TransformFn::Translate3d.fragment(&[10.into()]),
            "translate3d(10px,0px,0px)"
        );
    }

    #[test]
    fn extra_arguments_are_ignored() {
        assert_eq!(TransformFn::SkewX.fragment(&[5.into(), 9.into()]), "skewX(5deg)");
    }

    #[test]
    fn rotate3d_mixes_kinds() {
        let args: Vec<Arg> = vec![1.into(), 0.into(), "0".into(), 90.into()];
        assert_eq!(TransformFn::Rotate3d.fragment(&args), "rotate3d(1,0,0,90deg)");
    }

    #[test]
    fn matrix3d_takes_sixteen_numbers() {
        assert_eq!(TransformFn::Matrix3d.signature().len(), 16);
        assert_eq!(TransformFn::Matrix.signature().len(), 6);
    }

    #[test]
    fn parse_by_css_name() {
        assert_eq!("translateZ".parse::<TransformFn>().unwrap(), TransformFn::TranslateZ);
        assert!("translatez".parse::<TransformFn>().is_err());
        for f in TransformFn::ALL {
            assert_eq!(f.name().parse::<TransformFn>().unwrap(), *f);
        }
    }

    #[test]
    fn dimensions() {
        assert_eq!(TransformFn::Skew.dimension(), Dimension::TwoD);
        assert_eq!(TransformFn::Perspective.dimension(), Dimension::ThreeD);
    }

    #[test]
    fn alias_padding_uses_identity() {
        let scale = TransformFn::pad_alias(TransformFn::Scale, TransformFn::Scale3d, &[2.into(), 3.into()]);
        assert_eq!(TransformFn::Scale3d.fragment(&scale), "scale3d(2,3,1)");

        let translate = TransformFn::pad_alias(TransformFn::Translate, TransformFn::Translate3d, &[10.into()]);
        assert_eq!(TransformFn::Translate3d.fragment(&translate), "translate3d(10px,0px,0px)");
    }
}
