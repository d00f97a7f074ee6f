use std::collections::VecDeque;

use proptest::prelude::*;
use trellis::{ArrayQueue, ArrayStack, LinkedList, LinkedQueue, Queue};

#[derive(Debug, Clone)]
enum Op {
    Push(u8),
    Pop,
}

fn ops() -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(
        prop_oneof![any::<u8>().prop_map(Op::Push), Just(Op::Pop)],
        1..100,
    )
}

fn check_queue<Q: Queue<u8>>(mut queue: Q, ops: &[Op]) {
    let cap = queue.capacity();
    let mut model = VecDeque::new();
    for op in ops {
        match *op {
            Op::Push(x) => {
                let res = queue.enqueue(x);
                if model.len() == cap {
                    assert_eq!(res.unwrap_err().into_inner(), x);
                } else {
                    assert!(res.is_ok());
                    model.push_back(x);
                }
            }
            Op::Pop => assert_eq!(queue.dequeue(), model.pop_front()),
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek(), model.front());
    }
}

proptest! {
    #[test]
    fn queues_match_vec_deque(ops in ops(), cap in 0usize..8) {
        check_queue(ArrayQueue::with_capacity(cap), &ops);
        check_queue(LinkedQueue::with_capacity(cap), &ops);
    }

    #[test]
    fn stack_matches_vec(ops in ops(), cap in 0usize..8) {
        let mut stack = ArrayStack::with_capacity(cap);
        let mut model = Vec::new();
        for op in &ops {
            match *op {
                Op::Push(x) => {
                    if model.len() == cap {
                        prop_assert!(stack.push(x).is_err());
                    } else {
                        prop_assert!(stack.push(x).is_ok());
                        model.push(x);
                    }
                }
                Op::Pop => prop_assert_eq!(stack.pop(), model.pop()),
            }
            prop_assert_eq!(stack.peek(), model.last());
        }
        prop_assert_eq!(stack.into_vec(), model);
    }

    #[test]
    fn linked_list_matches_vec_deque(
        front in proptest::collection::vec(any::<u8>(), 0..20),
        back in proptest::collection::vec(any::<u8>(), 0..20),
        pos in 0usize..40,
    ) {
        let mut list = LinkedList::new();
        let mut model = VecDeque::new();
        for &x in &front {
            list.push_front(x);
            model.push_front(x);
        }
        for &x in &back {
            list.push_back(x);
            model.push_back(x);
        }
        prop_assert_eq!(list.to_vec(), model.iter().copied().collect::<Vec<_>>());

        prop_assert_eq!(list.remove_at(pos), model.remove(pos));
        prop_assert_eq!(list.len(), model.len());

        if let Some(&x) = model.get(model.len() / 2) {
            let idx = model.iter().position(|&y| y == x).unwrap();
            model.remove(idx);
            prop_assert!(list.remove(&x));
        }
        prop_assert_eq!(list.to_vec(), model.iter().copied().collect::<Vec<_>>());

        list.reverse();
        let reversed: Vec<u8> = model.iter().rev().copied().collect();
        prop_assert_eq!(list.to_vec(), reversed);
    }
}

#[test]
fn linked_queue_reuses_list_slots() {
    let mut queue = LinkedQueue::with_capacity(2);
    for round in 0..100u32 {
        queue.enqueue(round).unwrap();
        queue.enqueue(round + 1).unwrap();
        assert!(queue.enqueue(0).is_err());
        assert_eq!(queue.dequeue(), Some(round));
        assert_eq!(queue.dequeue(), Some(round + 1));
    }
    assert!(queue.is_empty());
}
