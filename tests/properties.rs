use std::rc::Rc;

use proptest::prelude::*;
use static_vector::StaticVector;

const CAPACITY: usize = 8;

#[derive(Clone, Debug)]
enum Op {
    Push(i32),
    Pop,
    Clear,
    Truncate(usize),
}

fn any_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::Push),
        3 => Just(Op::Pop),
        1 => Just(Op::Clear),
        1 => (0..=CAPACITY + 2).prop_map(Op::Truncate),
    ]
}

proptest! {
    #[test]
    fn length_stays_within_capacity(ops in proptest::collection::vec(any_op(), 0..64)) {
        let mut sut = StaticVector::<i32, CAPACITY>::new();
        let mut model = Vec::new();

        for op in ops {
            match op {
                Op::Push(value) => {
                    let pushed = sut.try_push(value);
                    if model.len() < CAPACITY {
                        prop_assert!(pushed.is_ok());
                        model.push(value);
                    } else {
                        prop_assert_eq!(pushed.unwrap_err().into_inner(), value);
                    }
                }
                Op::Pop => {
                    prop_assert_eq!(sut.pop(), model.pop());
                }
                Op::Clear => {
                    sut.clear();
                    model.clear();
                }
                Op::Truncate(len) => {
                    sut.truncate(len);
                    model.truncate(len);
                }
            }

            prop_assert!(sut.len() <= sut.capacity());
            prop_assert_eq!(sut.is_full(), sut.len() == CAPACITY);
            prop_assert_eq!(sut.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn reverse_iteration_is_forward_reversed(values in proptest::collection::vec(any::<i16>(), 0..=16)) {
        let sut: StaticVector<i16, 16> = values.iter().copied().collect();

        let forward: Vec<_> = sut.iter().rev().collect();
        let reverse: Vec<_> = sut.rev_iter().collect();
        prop_assert_eq!(forward, reverse);

        let mut back_and_forth: Vec<_> = sut.rev_iter().rev().copied().collect();
        back_and_forth.reverse();
        prop_assert_eq!(back_and_forth, sut.rev_iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn reverse_random_access_matches_forward_index(
        values in proptest::collection::vec(any::<u8>(), 1..=16),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut sut: StaticVector<u8, 16> = values.iter().copied().collect();
        let len = sut.len();
        let offset = pick.index(len);

        prop_assert_eq!(sut.rev_iter()[offset], sut[len - 1 - offset]);
        prop_assert_eq!(sut.rev_iter().nth(offset), sut.get(len - 1 - offset));

        let bumped = sut[len - 1 - offset].wrapping_add(1);
        sut.rev_iter_mut()[offset] = bumped;
        prop_assert_eq!(sut[len - 1 - offset], values[len - 1 - offset].wrapping_add(1));
    }

    #[test]
    fn sorting_in_reverse_sorts_descending(values in proptest::collection::vec(any::<i32>(), 0..=16)) {
        let mut sut: StaticVector<i32, 16> = values.iter().copied().collect();
        sut.rev_iter_mut().sort_unstable();

        prop_assert!(sut.rev_iter().is_sorted());
        prop_assert!(sut.windows(2).all(|pair| pair[0] >= pair[1]));

        let mut expected = values.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(sut.as_slice(), expected.as_slice());
    }

    #[test]
    fn copy_across_capacities_adds_one_reference(len in 0usize..=4) {
        let handles: Vec<_> = (0..len).map(Rc::new).collect();
        let source: StaticVector<Rc<usize>, 4> = handles.iter().cloned().collect();

        {
            let wide = StaticVector::<Rc<usize>, 12>::cloned_from(&source);
            prop_assert_eq!(&wide, &source);
            prop_assert!(handles.iter().all(|h| Rc::strong_count(h) == 3));
        }

        let moved = StaticVector::<Rc<usize>, 4>::converted_from(source);
        prop_assert!(handles.iter().all(|h| Rc::strong_count(h) == 2));

        drop(moved);
        prop_assert!(handles.iter().all(|h| Rc::strong_count(h) == 1));
    }
}
