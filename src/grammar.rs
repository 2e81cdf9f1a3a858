//! The closed set of accepted query shapes.
//!
//! Every shape is a combination of the [`Precision`] (how many components per axis)
//! and the [`HemisphereLayout`] (where the hemisphere letters are placed).
//! Both axes always share the same precision.

use geoquery_types::{
    consts::MINUS_SIGN, AngleComponent, DecimalNumber, Hemisphere, Mark, Precision,
    StructuralMismatch,
};

use crate::normalize::{Normalized, Token};

/// Where the hemisphere letters stand relative to the numbers of their axes
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) enum HemisphereLayout {
    /// `a… b…`
    Untagged,
    /// `H a… H b…`
    PrefixPrefix,
    /// `a… H b… H`
    SuffixSuffix,
    /// `a… H H b…`
    SuffixPrefix,
    /// `H a… b… H`
    PrefixSuffix,
}

impl HemisphereLayout {
    pub(crate) const fn is_tagged(self) -> bool {
        !matches!(self, Self::Untagged)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Shape {
    pub(crate) precision: Precision,
    pub(crate) layout: HemisphereLayout,
}

/// The axis as it appears in the query, before assigning it to latitude or longitude
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RawAxis {
    pub(crate) angle: AngleComponent,
    pub(crate) hemisphere: Option<Hemisphere>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShapeMatch {
    pub(crate) shape: Shape,
    /// The axis which goes first in the query
    pub(crate) first: RawAxis,
    pub(crate) second: RawAxis,
}

/// A number with the mark following it
#[derive(Debug, Clone, PartialEq)]
struct Value<'a> {
    literal: &'a str,
    mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq)]
enum Item<'a> {
    Value(Value<'a>),
    Hemisphere(Hemisphere),
}

/// Attach the marks to their numbers
fn items(tokens: &[Token]) -> Result<Vec<Item<'_>>, StructuralMismatch> {
    let mut items = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Number(literal) => items.push(Item::Value(Value {
                literal,
                mark: None,
            })),
            Token::Mark(mark) => match items.last_mut() {
                Some(Item::Value(value)) if value.mark.is_none() => value.mark = Some(*mark),
                _ => return Err(StructuralMismatch::DanglingMark),
            },
            Token::Hemisphere(hemisphere) => items.push(Item::Hemisphere(*hemisphere)),
            Token::Unknown(text) => return Err(StructuralMismatch::UnexpectedToken(text.clone())),
        }
    }
    Ok(items)
}

fn values<'i, 'a>(items: &'i [Item<'a>]) -> Result<Vec<&'i Value<'a>>, StructuralMismatch> {
    items
        .iter()
        .map(|item| match item {
            Item::Value(value) => Ok(value),
            Item::Hemisphere(_) => Err(StructuralMismatch::TooManyHemispheres),
        })
        .collect()
}

fn split_half<T>(values: Vec<T>) -> Result<(Vec<T>, Vec<T>), StructuralMismatch> {
    if values.len() % 2 != 0 {
        return Err(StructuralMismatch::OddComponentCount);
    }

    let mut first = values;
    let second = first.split_off(first.len() / 2);
    Ok((first, second))
}

type Group<'i, 'a> = (Vec<&'i Value<'a>>, Option<Hemisphere>);

/// Find the layout and split the values into two axes
fn split_axes<'i, 'a>(
    items: &'i [Item<'a>],
) -> Result<(HemisphereLayout, Group<'i, 'a>, Group<'i, 'a>), StructuralMismatch> {
    let hemispheres: Vec<_> = items
        .iter()
        .enumerate()
        .filter_map(|(i, item)| match item {
            Item::Hemisphere(h) => Some((i, *h)),
            Item::Value(_) => None,
        })
        .collect();

    match hemispheres.as_slice() {
        [] => {
            let (first, second) = split_half(values(items)?)?;
            Ok((HemisphereLayout::Untagged, (first, None), (second, None)))
        }
        [_] => Err(StructuralMismatch::PartialHemisphere),
        &[(i, h1), (j, h2)] => {
            if h1.axis() == h2.axis() {
                return Err(StructuralMismatch::SameAxisHemispheres);
            }

            let before = values(&items[..i])?;
            let between = values(&items[i + 1..j])?;
            let after = values(&items[j + 1..])?;

            match (before.is_empty(), between.is_empty(), after.is_empty()) {
                (true, false, false) => Ok((
                    HemisphereLayout::PrefixPrefix,
                    (between, Some(h1)),
                    (after, Some(h2)),
                )),
                (false, false, true) => Ok((
                    HemisphereLayout::SuffixSuffix,
                    (before, Some(h1)),
                    (between, Some(h2)),
                )),
                (false, true, false) => Ok((
                    HemisphereLayout::SuffixPrefix,
                    (before, Some(h1)),
                    (after, Some(h2)),
                )),
                (true, false, true) => {
                    let (first, second) = split_half(between)?;
                    Ok((
                        HemisphereLayout::PrefixSuffix,
                        (first, Some(h1)),
                        (second, Some(h2)),
                    ))
                }
                _ => Err(StructuralMismatch::NoShape),
            }
        }
        _ => Err(StructuralMismatch::TooManyHemispheres),
    }
}

/// Turn the numbers of a single axis into an angle
fn axis(values: &[&Value<'_>], hemisphere: Option<Hemisphere>) -> Result<RawAxis, StructuralMismatch> {
    let last = values.len().saturating_sub(1);
    let mut negative = false;
    let mut components = Vec::with_capacity(values.len());

    for (index, value) in values.iter().enumerate() {
        let literal = match value.literal.strip_prefix(MINUS_SIGN) {
            Some(unsigned) => {
                if index > 0 {
                    return Err(StructuralMismatch::MisplacedSign);
                }
                if hemisphere.is_some() {
                    return Err(StructuralMismatch::SignedHemisphere);
                }
                negative = true;
                unsigned
            }
            None => value.literal,
        };

        if let Some(mark) = value.mark {
            if Mark::for_position(index) != Some(mark) {
                return Err(StructuralMismatch::MisplacedMark);
            }
        }

        let number: DecimalNumber = literal.parse()?;
        if number.is_fractional() && index != last {
            return Err(StructuralMismatch::FractionalComponent);
        }
        components.push(number);
    }

    let angle = AngleComponent::with_components(negative, components)?;
    Ok(RawAxis { angle, hemisphere })
}

fn precision(values: &[&Value<'_>]) -> Result<Precision, StructuralMismatch> {
    if values.is_empty() {
        return Err(StructuralMismatch::EmptyAxis);
    }
    Precision::from_count(values.len()).ok_or(StructuralMismatch::TooManyComponents)
}

/// Match the query against the accepted shapes
pub(crate) fn match_shape(normalized: &Normalized) -> Result<ShapeMatch, StructuralMismatch> {
    let items = items(normalized.tokens())?;
    let (layout, (first, first_hemi), (second, second_hemi)) = split_axes(&items)?;

    let precision = precision(&first)?;
    if precision != self::precision(&second)? {
        return Err(StructuralMismatch::PrecisionMismatch);
    }

    Ok(ShapeMatch {
        shape: Shape { precision, layout },
        first: axis(&first, first_hemi)?,
        second: axis(&second, second_hemi)?,
    })
}

#[cfg(test)]
mod tests {
    use geoquery_types::{Pole::North, RotationalDirection::East};

    use super::*;
    use crate::normalize::normalize;

    fn shape(query: &str) -> Result<Shape, StructuralMismatch> {
        match_shape(&normalize(query)).map(|m| m.shape)
    }

    fn mismatch(query: &str) -> StructuralMismatch {
        match_shape(&normalize(query)).unwrap_err()
    }

    #[test]
    fn untagged_shapes() {
        assert_eq!(
            shape("55 37"),
            Ok(Shape {
                precision: Precision::Degrees,
                layout: HemisphereLayout::Untagged
            })
        );
        assert_eq!(
            shape("1 2.8 3 4.9").unwrap().precision,
            Precision::DegreesMinutes
        );
        assert_eq!(
            shape("1 2 3.8 4 5 6.9").unwrap().precision,
            Precision::DegreesMinutesSeconds
        );
    }

    #[test]
    fn tagged_layouts() {
        assert_eq!(
            shape("N 1 2 E 4 5").unwrap().layout,
            HemisphereLayout::PrefixPrefix
        );
        assert_eq!(
            shape("55°52.981′S36°59.540′W").unwrap().layout,
            HemisphereLayout::SuffixSuffix
        );
        assert_eq!(
            shape("55.1 N E 37.2").unwrap().layout,
            HemisphereLayout::SuffixPrefix
        );
        assert_eq!(
            shape("N55°49′02.95″,37°03′09.95″W").unwrap().layout,
            HemisphereLayout::PrefixSuffix
        );
    }

    #[test]
    fn raw_axes_keep_source_order() {
        let m = match_shape(&normalize("E 1 2 N 4 5")).unwrap();
        assert_eq!(m.first.hemisphere, Some(East.into()));
        assert_eq!(m.first.angle.to_string(), "1°2′");
        assert_eq!(m.second.hemisphere, Some(North.into()));
        assert_eq!(m.second.angle.to_string(), "4°5′");
    }

    #[test]
    fn untagged_sign() {
        let m = match_shape(&normalize("-55.94920 36.82205")).unwrap();
        assert!(m.first.angle.is_negative());
        assert!(!m.second.angle.is_negative());
    }

    #[test]
    fn odd_numbers() {
        assert_eq!(mismatch("1 2 3"), StructuralMismatch::OddComponentCount);
        assert_eq!(mismatch("1 2 3 4 5"), StructuralMismatch::OddComponentCount);
        assert_eq!(mismatch("55.2,37,6"), StructuralMismatch::OddComponentCount);
        assert_eq!(mismatch("N 1 2 3 E"), StructuralMismatch::OddComponentCount);
    }

    #[test]
    fn partial_hemispheres() {
        for query in [
            "N 1 2",
            "1 E 2",
            "1 2 N",
            "N 1 2 3 4",
            "1 2 E 3 4",
            "1 2 3 4 E",
            "N 1 2 3 4 5 6",
            "1 2 3 E 4 5 6",
            "1 2 3 4 5 6 E",
        ] {
            assert_eq!(
                mismatch(query),
                StructuralMismatch::PartialHemisphere,
                "{query}"
            );
        }
    }

    #[test]
    fn too_many_hemispheres() {
        assert_eq!(
            mismatch("n1 2 3 e 4 5 6 w"),
            StructuralMismatch::TooManyHemispheres
        );
    }

    #[test]
    fn same_axis_hemispheres() {
        assert_eq!(mismatch("N 1 S 2"), StructuralMismatch::SameAxisHemispheres);
        assert_eq!(mismatch("1 E 2 W"), StructuralMismatch::SameAxisHemispheres);
    }

    #[test]
    fn no_shape() {
        assert_eq!(mismatch("N E 1 2"), StructuralMismatch::NoShape);
        assert_eq!(mismatch("1 2 N E"), StructuralMismatch::NoShape);
    }

    #[test]
    fn precision_mismatch() {
        assert_eq!(mismatch("n1 2 e 3 4 5 6"), StructuralMismatch::TooManyComponents);
        assert_eq!(mismatch("N 1 1 1 E 60 1"), StructuralMismatch::PrecisionMismatch);
        assert_eq!(
            mismatch("N1 2 3 4 E 4 5 6 7"),
            StructuralMismatch::TooManyComponents
        );
        assert_eq!(
            mismatch("1 2 3 4 5 6 7 8"),
            StructuralMismatch::TooManyComponents
        );
    }

    #[test]
    fn signs() {
        assert_eq!(mismatch("N -1 E 2"), StructuralMismatch::SignedHemisphere);
        assert_eq!(mismatch("N 1 E -2"), StructuralMismatch::SignedHemisphere);
        assert_eq!(mismatch("N 1 -2 E 3 4"), StructuralMismatch::MisplacedSign);
        assert_eq!(mismatch("N 1 2 E 3 -4"), StructuralMismatch::MisplacedSign);
        assert_eq!(mismatch("N 1 2 -3 E 4 5 6"), StructuralMismatch::MisplacedSign);
        assert_eq!(mismatch("1 -2 3 4"), StructuralMismatch::MisplacedSign);
    }

    #[test]
    fn fractions_only_last() {
        for query in [
            "N 1.1 2 3 E 4 5 6",
            "N 1 2.1 3 E 4 5 6",
            "N 1 2 3 E 4.1 5 6",
            "N 1 2 3 E 4 5.1 6",
        ] {
            assert_eq!(
                mismatch(query),
                StructuralMismatch::FractionalComponent,
                "{query}"
            );
        }
    }

    #[test]
    fn marks() {
        assert_eq!(mismatch("° 55 37"), StructuralMismatch::DanglingMark);
        assert_eq!(mismatch("55°° 37"), StructuralMismatch::DanglingMark);
        assert_eq!(mismatch("55′ 37′"), StructuralMismatch::MisplacedMark);
        assert_eq!(mismatch("N 1″ 2 E 3 4"), StructuralMismatch::MisplacedMark);
    }

    #[test]
    fn unknown_words() {
        assert_eq!(
            mismatch("55 a 37"),
            StructuralMismatch::UnexpectedToken("a".into())
        );
    }

    #[test]
    fn malformed_number() {
        assert!(matches!(
            mismatch("55,2,37,6 1"),
            StructuralMismatch::Literal(_)
        ));
    }

    #[test]
    fn empty() {
        assert_eq!(mismatch(""), StructuralMismatch::EmptyAxis);
    }
}
