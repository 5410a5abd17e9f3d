use crate::disjoint_set::DisjointIntervalSet;
use crate::errors::{Error, Result};
use crate::intervals::Interval;
use crate::order::Order;
use std::str::FromStr;

/// Parse one side of an interval.  An empty string is an unbounded side.
fn parse_value<E: FromStr>(text: &str) -> Result<Option<E>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    text.parse()
        .map(Some)
        .map_err(|_| Error::IllegalConfiguration(format!("invalid value {:?}", text)))
}

impl<E: FromStr, O: Order<E> + Default> FromStr for Interval<E, O> {
    type Err = Error;

    /// Parse the canonical rendering of an interval, `[0,10)`, `(,5]`,...
    /// or `O` for the empty interval.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s == "O" {
            return Ok(Interval::empty_with(O::default()));
        }

        let mut chars = s.chars();
        let lower_included = match chars.next() {
            Some('[') => true,
            Some('(') => false,
            _ => {
                return Err(Error::IllegalConfiguration(format!(
                    "expected '[' or '(' in {:?}",
                    s
                )))
            }
        };
        let upper_included = match chars.next_back() {
            Some(']') => true,
            Some(')') => false,
            _ => {
                return Err(Error::IllegalConfiguration(format!(
                    "expected ']' or ')' in {:?}",
                    s
                )))
            }
        };
        let Some((lower, upper)) = chars.as_str().split_once(',') else {
            return Err(Error::IllegalConfiguration(format!(
                "missing ',' in {:?}",
                s
            )));
        };
        Interval::from_parts(
            O::default(),
            parse_value(lower)?,
            lower_included,
            parse_value(upper)?,
            upper_included,
        )
    }
}

impl<E: FromStr + Clone, O: Order<E> + Default> FromStr
    for DisjointIntervalSet<E, O>
{
    type Err = Error;

    /// Parse a list of intervals joined with `U`, as displayed.  The
    /// intervals need not be disjoint nor sorted.
    fn from_str(s: &str) -> Result<Self> {
        let mut set = DisjointIntervalSet::with_order(O::default());
        for part in s.split('U') {
            set.insert(part.parse()?);
        }
        Ok(set)
    }
}

#[cfg(test)]
mod test {
    use crate::disjoint_set::DisjointIntervalSet;
    use crate::errors::Error;
    use crate::intervals::Interval;
    use crate::order::Discrete;

    #[test]
    fn test_parse_interval() {
        assert_eq!(
            "[0,10]".parse::<Interval<i32>>(),
            Ok(Interval::new_closed_closed(0, 10))
        );
        assert_eq!(
            "( 3 , 7 )".parse::<Interval<i32>>(),
            Ok(Interval::new_open_open(3, 7))
        );
        assert_eq!(
            "(,5]".parse::<Interval<i32>>(),
            Ok(Interval::new_unbounded_closed(5))
        );
        assert_eq!(
            "[-1,)".parse::<Interval<i32>>(),
            Ok(Interval::new_closed_unbounded(-1))
        );
        assert_eq!(
            "(,)".parse::<Interval<i32>>(),
            Ok(Interval::doubly_unbounded())
        );
        assert_eq!("O".parse::<Interval<i32>>(), Ok(Interval::empty()));
        assert_eq!("[5,1]".parse::<Interval<i32>>(), Ok(Interval::empty()));

        let intv: Interval<i32, Discrete> = "(3,4)".parse().unwrap();
        assert!(intv.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        for text in ["", "[1,2", "1,2]", "[1;2]", "[a,2]", "{1,2}"] {
            assert!(
                matches!(
                    text.parse::<Interval<i32>>(),
                    Err(Error::IllegalConfiguration(_))
                ),
                "{text:?}"
            );
        }

        //  an unbounded side cannot be included
        assert!(matches!(
            "[,5]".parse::<Interval<i32>>(),
            Err(Error::IllegalConfiguration(_))
        ));
        assert!(matches!(
            "(1,]".parse::<Interval<i32>>(),
            Err(Error::IllegalConfiguration(_))
        ));
    }

    #[test]
    fn test_parse_set() {
        let set: DisjointIntervalSet<i32> = "[7,10]U[0,3]".parse().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "[0,3]U[7,10]");

        let set: DisjointIntervalSet<i32> = "[0,3)U[3,5]".parse().unwrap();
        assert_eq!(set.to_string(), "[0,5]");

        let set: DisjointIntervalSet<i64, Discrete> = "[0,3]U[4,5]".parse().unwrap();
        assert_eq!(set.to_string(), "[0,5]");

        let set: DisjointIntervalSet<i32> = "O".parse().unwrap();
        assert!(set.is_empty());

        assert!("[0,3]U".parse::<DisjointIntervalSet<i32>>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let text = "(,-5)U[0,3]U(7,10]U[20,)";
        let set: DisjointIntervalSet<i32> = text.parse().unwrap();
        assert_eq!(set.to_string(), text);
    }
}
