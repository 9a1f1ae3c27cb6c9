use shapevg_core::{Point, Rectangle};

use crate::group::Group;
use crate::item::Item;

/// A tree of styled content.
///
/// Each branch owns its children and places them relative to the origin of
/// its group frame.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Composite {
    Leaf(Item),
    Branch(Group, Vec<Composite>),
}

impl Composite {
    pub fn leaf(item: impl Into<Item>) -> Self {
        Self::Leaf(item.into())
    }

    pub fn branch(group: Group, children: Vec<Composite>) -> Self {
        Self::Branch(group, children)
    }

    pub fn frame(&self) -> Rectangle {
        match self {
            Self::Leaf(item) => item.frame(),
            Self::Branch(group, _) => group.frame,
        }
    }

    /// Shrinks every frame in the tree onto its contents without moving
    /// anything in the coordinate space of the root's parent.
    pub fn resized_to_fit_contents(&self) -> Self {
        match self {
            Self::Leaf(item) => Self::Leaf(item.resized_to_fit_contents()),
            Self::Branch(group, children) => {
                let fitted: Vec<Composite> = children
                    .iter()
                    .map(Composite::resized_to_fit_contents)
                    .collect();

                let union = Rectangle::non_empty_union(fitted.iter().map(Composite::frame))
                    .unwrap_or(Rectangle::ZERO);
                log::trace!("fitted group {:?} to {:?}", group.identifier, union);

                let group = Group::new(
                    group.identifier.clone(),
                    union.translated(group.frame.origin),
                );
                let offset = -union.origin;
                Self::Branch(
                    group,
                    fitted.iter().map(|child| child.translated(offset)).collect(),
                )
            }
        }
    }

    /// Moves the node within its parent. A branch only moves its group
    /// frame, so its children move with it.
    pub fn translated(&self, by: Point) -> Self {
        match self {
            Self::Leaf(item) => Self::Leaf(item.translated(by)),
            Self::Branch(group, children) => Self::Branch(group.translated(by), children.clone()),
        }
    }

    /// The bounding box of all content in the coordinate space of this
    /// node's parent.
    pub fn axis_aligned_bounding_box(&self) -> Rectangle {
        match self {
            Self::Leaf(item) => item.axis_aligned_bounding_box(),
            Self::Branch(group, children) => Rectangle::non_empty_union(
                children.iter().map(Composite::axis_aligned_bounding_box),
            )
            .unwrap_or(Rectangle::ZERO)
            .translated(group.frame.origin),
        }
    }

    /// Every leaf item, depth first.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }
}

impl From<Item> for Composite {
    fn from(item: Item) -> Self {
        Self::Leaf(item)
    }
}

/// Iterator over the leaf items of a [`Composite`].
#[derive(Debug, Clone)]
pub struct Leaves<'a> {
    stack: Vec<&'a Composite>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node {
                Composite::Leaf(item) => return Some(item),
                Composite::Branch(_, children) => self.stack.extend(children.iter().rev()),
            }
        }
        None
    }
}
