use crate::node::{insert, Node};
use quickcheck::{Arbitrary, Gen};

impl<T> Arbitrary for Node<T> where T: Arbitrary + Ord {
    fn arbitrary(gen: &mut Gen) -> Self {
        let mut node = Node::new(T::arbitrary(gen));
        for key in Vec::<T>::arbitrary(gen) {
            node = insert(Some(node), key);
        }
        *node
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let mut keys = Vec::new();
        self.keys_in_order(&mut keys);

        Box::new(keys.shrink().filter_map(|keys| {
            let mut keys = keys.into_iter();
            let mut node = Node::new(keys.next()?);
            for key in keys {
                node = insert(Some(node), key);
            }
            Some(*node)
        }))
    }
}
