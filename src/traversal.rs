use std::fmt;
use std::str::FromStr;
use crate::error::Error;




/**
 * The order in which a traversal visits the nodes of a tree. `ReverseOrder`
 * is an in-order traversal that visits the greater subtree first, yielding
 * values from greatest to least.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
    ReverseOrder,
}




// ============================================================================
impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::InOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::ReverseOrder,
    ];
}

impl fmt::Display for Traversal {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Traversal::InOrder      => write!(fmt, "inorder"),
            Traversal::PreOrder     => write!(fmt, "preorder"),
            Traversal::PostOrder    => write!(fmt, "postorder"),
            Traversal::ReverseOrder => write!(fmt, "reverse"),
        }
    }
}

impl FromStr for Traversal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inorder"   => Ok(Traversal::InOrder),
            "preorder"  => Ok(Traversal::PreOrder),
            "postorder" => Ok(Traversal::PostOrder),
            "reverse"   => Ok(Traversal::ReverseOrder),
            _ => Err(Error::UnknownTraversal(s.to_string())),
        }
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Traversal;
    use crate::error::Error;

    #[test]
    fn traversals_parse_from_their_display_names() {
        for t in Traversal::ALL.iter() {
            assert_eq!(t.to_string().parse::<Traversal>(), Ok(*t));
        }
        assert_eq!(
            "level".parse::<Traversal>(),
            Err(Error::UnknownTraversal("level".into()))
        );
    }
}
