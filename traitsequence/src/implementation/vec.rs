use crate::interface::Sequence;

impl<'a, Item: 'a> Sequence<'a, Item, [Item]> for Vec<Item> {
    type Iterator = std::slice::Iter<'a, Item>;

    fn iter(&'a self) -> Self::Iterator {
        self[..].iter()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}
