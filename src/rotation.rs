use std::fmt;
use std::str::FromStr;
use crate::error::Error;




/**
 * Decides, for a node whose subtrees differ in height by more than one,
 * whether the heavy child is first rotated toward its outer side (a double
 * rotation) before the node itself is rotated.
 *
 * `Height` is the AVL rule: the double rotation happens only when the heavy
 * child's inner subtree is strictly taller than its outer subtree. Every node
 * of the tree then stays within a height difference of one.
 *
 * `Presence` performs the double rotation whenever the heavy child has any
 * inner subtree at all. It does not keep the whole tree height-balanced, but
 * it reproduces the shapes of the classic lesser/greater predicate tree, for
 * example heights 1, 2, 2, 3, 3, 4, 4, 4, 4, 5 when inserting 8, 6, 7, 5, 3,
 * 0, 9, 4, 2, 1.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationRule {
    Height,
    Presence,
}




// ============================================================================
impl RotationRule {




    /**
     * Return true if the heavy child should be rotated first. The arguments
     * are the heights of the heavy child's inner and outer subtrees (zero for
     * an absent subtree).
     */
    pub(crate) fn rotates_inner_first(self, inner_height: usize, outer_height: usize) -> bool {
        match self {
            RotationRule::Height   => inner_height > outer_height,
            RotationRule::Presence => inner_height > 0,
        }
    }
}




// ============================================================================
impl Default for RotationRule {
    fn default() -> Self {
        RotationRule::Height
    }
}

impl fmt::Display for RotationRule {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RotationRule::Height   => write!(fmt, "height"),
            RotationRule::Presence => write!(fmt, "presence"),
        }
    }
}

impl FromStr for RotationRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "height"   => Ok(RotationRule::Height),
            "presence" => Ok(RotationRule::Presence),
            _ => Err(Error::UnknownRotationRule(s.to_string())),
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::RotationRule;
    use crate::error::Error;

    #[test]
    fn height_rule_only_double_rotates_a_taller_inner_subtree() {
        assert!( RotationRule::Height.rotates_inner_first(2, 1));
        assert!(!RotationRule::Height.rotates_inner_first(1, 1));
        assert!(!RotationRule::Height.rotates_inner_first(1, 2));
        assert!(!RotationRule::Height.rotates_inner_first(0, 1));
    }

    #[test]
    fn presence_rule_double_rotates_any_inner_subtree() {
        assert!( RotationRule::Presence.rotates_inner_first(1, 2));
        assert!( RotationRule::Presence.rotates_inner_first(1, 1));
        assert!(!RotationRule::Presence.rotates_inner_first(0, 1));
    }

    #[test]
    fn rules_parse_from_their_display_names() {
        for rule in [RotationRule::Height, RotationRule::Presence].iter() {
            assert_eq!(rule.to_string().parse::<RotationRule>(), Ok(*rule));
        }
        assert_eq!(
            "red-black".parse::<RotationRule>(),
            Err(Error::UnknownRotationRule("red-black".into()))
        );
    }
}
