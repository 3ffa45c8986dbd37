use crate::interface::Sequence;

impl<'a, Item: 'a> Sequence<'a, Item, [Item]> for [Item] {
    type Iterator = std::slice::Iter<'a, Item>;

    fn iter(&'a self) -> Self::Iterator {
        <[Item]>::iter(self)
    }

    fn len(&self) -> usize {
        <[Item]>::len(self)
    }
}
