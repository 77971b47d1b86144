extern crate std;

use std::vec::Vec;

use crate::linked_list::intrusive::{list::LinkedList, single::SingleNode, traits::NodeWithData};


fn nodes(values: &[i32]) -> Vec<SingleNode<i32>> {
    values.iter().copied().map(SingleNode::new).collect()
}

fn link_all(nodes: &mut [SingleNode<i32>]) -> LinkedList<'_, SingleNode<i32>> {
    let mut list = LinkedList::new();
    for node in nodes.iter_mut() {
        list.append(node);
    }
    list
}

fn values(list: &LinkedList<'_, SingleNode<i32>>) -> Vec<i32> {
    list.fold(Vec::new(), |mut acc, node| {
        acc.push(*node.data());
        acc
    })
}
