//! Random and exhaustive generation of test inputs of a given size.

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Builds a value of the given size from a stream of integer choices.
///
/// `generate` must be deterministic: the value may depend only on `size`
/// and the picks it makes.
pub trait Generator {
    type Value;

    fn generate<P: Picker>(&self, size: u32, picker: &mut P) -> Self::Value;
}

/// A source of choices: random, or enumerating every possible sequence.
pub trait Picker {
    /// An integer in `0..max`. `max` must be nonzero.
    fn pick_int(&mut self, max: u32) -> u32;
}

/// An infinite stream of seeded-random values of the given size.
pub fn generate_random<G: Generator>(
    generator: G,
    size: u32,
    seed: [u8; 32],
) -> impl Iterator<Item = G::Value> {
    let mut picker = RandomPicker {
        rng: StdRng::from_seed(seed),
    };
    std::iter::from_fn(move || Some(generator.generate(size, &mut picker)))
}

/// A finite stream of every generatable value of the given size.
pub fn generate_all<G: Generator>(generator: G, size: u32) -> impl Iterator<Item = G::Value> {
    let mut picker = ExhaustivePicker {
        index: 0,
        stack: Vec::new(),
        done: false,
    };
    std::iter::from_fn(move || {
        if picker.done {
            None
        } else {
            let value = generator.generate(size, &mut picker);
            picker.advance();
            Some(value)
        }
    })
}

struct RandomPicker {
    rng: StdRng,
}

impl Picker for RandomPicker {
    fn pick_int(&mut self, max: u32) -> u32 {
        assert_ne!(max, 0);
        self.rng.gen_range(0..max)
    }
}

/// Replays the recorded choice sequence, then extends it with zeroes; after
/// each generated value, the last incrementable choice is bumped, odometer
/// style, until every sequence has been tried.
struct ExhaustivePicker {
    index: usize,
    stack: Vec<(u32, u32)>,
    done: bool,
}

impl ExhaustivePicker {
    fn advance(&mut self) {
        self.index = 0;
        while let Some((choice, max)) = self.stack.pop() {
            if choice + 1 < max {
                self.stack.push((choice + 1, max));
                return;
            }
        }
        if self.stack.is_empty() {
            self.done = true;
        }
    }
}

impl Picker for ExhaustivePicker {
    fn pick_int(&mut self, max: u32) -> u32 {
        assert_ne!(max, 0);
        if let Some((choice, _)) = self.stack.get(self.index) {
            self.index += 1;
            *choice
        } else {
            assert_eq!(self.index, self.stack.len());
            self.stack.push((0, max));
            self.index += 1;
            0
        }
    }
}

#[test]
fn test_exhaustive_generation() {
    // Binary trees with `size` leaves.
    struct TreeGen;

    #[derive(Debug)]
    enum Tree {
        Leaf,
        Node(Box<Tree>, Box<Tree>),
    }

    impl Generator for TreeGen {
        type Value = Tree;

        fn generate<P: Picker>(&self, size: u32, picker: &mut P) -> Tree {
            assert_ne!(size, 0);
            if size == 1 {
                Tree::Leaf
            } else {
                let left_size = picker.pick_int(size - 1) + 1;
                let left = self.generate(left_size, picker);
                let right = self.generate(size - left_size, picker);
                Tree::Node(Box::new(left), Box::new(right))
            }
        }
    }

    // The number of binary trees with 5 leaves is the Catalan number C4.
    assert_eq!(generate_all(TreeGen, 5).count(), 14);
}
