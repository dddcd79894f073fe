#[allow(unused)] // Not actually unused
mod common;

use common::assert_pp_without_expectation;
use common::generative::{generate_all, generate_random, Generator, Picker};
use smart_pretty_printer::{
    align, annotate, group, hardline, line, line_, nest, nil, text, Doc,
};

struct DocGen;

impl Generator for DocGen {
    type Value = Doc<()>;

    fn generate<P: Picker>(&self, mut size: u32, picker: &mut P) -> Doc<()> {
        assert_ne!(size, 0);
        if size == 1 {
            match picker.pick_int(7) {
                0 => nil(),
                1 => text("a"),
                2 => text("bb"),
                3 => text("cccc"),
                4 => line(),
                5 => line_(),
                6 => hardline(),
                _ => unreachable!(),
            }
        } else if size == 2 {
            match picker.pick_int(4) {
                0 => group(self.generate(1, picker)),
                1 => nest(2, self.generate(1, picker)),
                2 => align(self.generate(1, picker)),
                3 => annotate((), self.generate(1, picker)),
                _ => unreachable!(),
            }
        } else {
            size -= 1;
            match picker.pick_int(5) {
                0 => {
                    let left_size = picker.pick_int(size - 1) + 1;
                    let right_size = size - left_size;
                    let left = self.generate(left_size, picker);
                    let right = self.generate(right_size, picker);
                    left + right
                }
                1 => group(self.generate(size, picker)),
                2 => nest(2, self.generate(size, picker)),
                3 => align(self.generate(size, picker)),
                4 => annotate((), self.generate(size, picker)),
                _ => unreachable!(),
            }
        }
    }
}

// The fast lazy engine and the strict oracle must agree on everything the
// generator can build, at every width.
#[test]
fn oracle_tests() {
    let docs = generate_all(DocGen, 4)
        .chain(generate_random(DocGen, 8, [0; 32]).take(500))
        .chain(generate_random(DocGen, 16, [1; 32]).take(500))
        .chain(generate_random(DocGen, 24, [2; 32]).take(100));

    let mut count = 0;
    for doc in docs {
        for width in 1..=8 {
            assert_pp_without_expectation(&doc, width);
        }
        count += 1;
    }
    println!("Tested {} documents", count);
}
