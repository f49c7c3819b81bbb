//! Linked list demonstration.
//!
//! Appends four integers and prints each node through a formatting
//! callback handed to `traverse`.

use strata::list::{traverse, IntList, Node};

fn print_node(node: &Node<i32>) {
    println!("Node value: {}", node.value());
}

fn main() {
    let mut list = IntList::new();
    list.append(5);
    list.append(10);
    list.append(20);
    list.append(40);

    if let Some(head) = list.head() {
        traverse(head, print_node);
    }
}
