/// An owned sequence that can be drained into another collection.
pub trait Sequence<T> {
    fn collect_into<C>(self) -> C
    where
        C: FromIterator<T>;

    fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<T>;
}
