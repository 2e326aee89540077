use crate::entry::Entry;
use crate::treap::node::Node;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::mem;

pub type Tree<T, U> = Option<Box<Node<T, U>>>;

pub fn len<T, U>(tree: &Tree<T, U>) -> usize {
    match tree {
        Some(ref node) => node.len,
        None => 0,
    }
}

// precondition: the node has a left child
fn rotate_right<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.left.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Some(node);
    child.update();
    child
}

// precondition: the node has a right child
fn rotate_left<T, U>(mut node: Box<Node<T, U>>) -> Box<Node<T, U>> {
    let mut child = match node.right.take() {
        Some(child) => child,
        None => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Some(node);
    child.update();
    child
}

pub fn insert<T, U>(tree: &mut Tree<T, U>, new_node: Node<T, U>) -> Option<Entry<T, U>>
where
    T: Ord,
{
    let mut node = match tree.take() {
        Some(node) => node,
        None => {
            *tree = Some(Box::new(new_node));
            return None;
        },
    };

    let ret = match new_node.entry.key.cmp(&node.entry.key) {
        Ordering::Less => {
            let ret = insert(&mut node.left, new_node);
            node.update();
            let should_rotate = match node.left {
                Some(ref child) => child.priority > node.priority,
                None => unreachable!(),
            };
            if should_rotate {
                node = rotate_right(node);
            }
            ret
        },
        Ordering::Greater => {
            let ret = insert(&mut node.right, new_node);
            node.update();
            let should_rotate = match node.right {
                Some(ref child) => child.priority > node.priority,
                None => unreachable!(),
            };
            if should_rotate {
                node = rotate_left(node);
            }
            ret
        },
        Ordering::Equal => Some(mem::replace(&mut node.entry, new_node.entry)),
    };

    *tree = Some(node);
    ret
}

pub fn remove<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Option<Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    let new_tree = {
        let node = match tree {
            Some(ref mut node) => node,
            None => return None,
        };
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => {
                let ret = remove(&mut node.left, key);
                node.update();
                return ret;
            },
            Ordering::Greater => {
                let ret = remove(&mut node.right, key);
                node.update();
                return ret;
            },
            Ordering::Equal => {
                let Node {
                    ref mut left,
                    ref mut right,
                    ..
                } = &mut **node;
                merge(left, right.take());
                left.take()
            },
        }
    };

    Some(mem::replace(tree, new_tree).expect("Unreachable code").entry)
}

// precondition: all keys in `l_tree` are strictly less than all keys in `r_tree`
pub fn merge<T, U>(l_tree: &mut Tree<T, U>, r_tree: Tree<T, U>) {
    match (l_tree.take(), r_tree) {
        (Some(mut l_node), Some(mut r_node)) => {
            if l_node.priority > r_node.priority {
                merge(&mut l_node.right, Some(r_node));
                l_node.update();
                *l_tree = Some(l_node);
            } else {
                let mut new_tree = Some(l_node);
                merge(&mut new_tree, r_node.left.take());
                r_node.left = new_tree;
                r_node.update();
                *l_tree = Some(r_node);
            }
        },
        (new_tree, None) | (None, new_tree) => *l_tree = new_tree,
    }
}

/// Splits off and returns the subtree holding all keys greater than or equal to `key`, leaving
/// the keys strictly less than `key` behind.
pub fn split<T, U, V>(tree: &mut Tree<T, U>, key: &V) -> Tree<T, U>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    match tree.take() {
        Some(mut node) => {
            let ret;
            if node.entry.key.borrow().cmp(key) == Ordering::Less {
                ret = split(&mut node.right, key);
                node.update();
                *tree = Some(node);
            } else {
                let res = split(&mut node.left, key);
                *tree = node.left.take();
                node.left = res;
                node.update();
                ret = Some(node);
            }
            ret
        },
        None => None,
    }
}

pub fn get<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get(&node.left, key),
            Ordering::Greater => get(&node.right, key),
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn get_mut<'a, T, U, V>(tree: &'a mut Tree<T, U>, key: &V) -> Option<&'a mut Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_mut().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => get_mut(&mut node.left, key),
            Ordering::Greater => get_mut(&mut node.right, key),
            Ordering::Equal => Some(&mut node.entry),
        }
    })
}

pub fn ceil<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Greater => ceil(&node.right, key),
            Ordering::Less => {
                match ceil(&node.left, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn floor<'a, T, U, V>(tree: &'a Tree<T, U>, key: &V) -> Option<&'a Entry<T, U>>
where
    T: Borrow<V>,
    V: Ord + ?Sized,
{
    tree.as_ref().and_then(|node| {
        match key.cmp(node.entry.key.borrow()) {
            Ordering::Less => floor(&node.left, key),
            Ordering::Greater => {
                match floor(&node.right, key) {
                    None => Some(&node.entry),
                    res => res,
                }
            },
            Ordering::Equal => Some(&node.entry),
        }
    })
}

pub fn min<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        Some(&curr.entry)
    })
}

pub fn max<T, U>(tree: &Tree<T, U>) -> Option<&Entry<T, U>>
where
    T: Ord,
{
    tree.as_ref().and_then(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        Some(&curr.entry)
    })
}
