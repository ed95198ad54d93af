pub trait Searchable<I: PartialEq> {
    fn index_of(&mut self, item: I) -> Option<usize>;
}

impl<I: PartialEq, T: Iterator<Item = I>> Searchable<I> for T {
    fn index_of(&mut self, item: I) -> Option<usize> {
        self.position(|el| el == item)
    }
}

pub trait TimeDelta {
    fn humanize_seconds(&self) -> String;
}

impl TimeDelta for f64 {
    fn humanize_seconds(&self) -> String {
        if *self >= 1.0 {
            format!("{:.2}s", self)
        } else if *self >= 1e-3 {
            format!("{:.2}ms", self * 1e3)
        } else {
            format!("{:.2}µs", self * 1e6)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_index_of_from_top() {
        let stack = vec![3, 1, 2, 1];
        assert_eq!(stack.iter().rev().index_of(&1), Some(0));
        assert_eq!(stack.iter().rev().index_of(&3), Some(3));
        assert_eq!(stack.iter().rev().index_of(&7), None);
    }

    #[test]
    fn test_humanize_seconds() {
        assert_eq!(2.5f64.humanize_seconds(), "2.50s");
        assert_eq!(0.0125f64.humanize_seconds(), "12.50ms");
        assert_eq!(0.000004f64.humanize_seconds(), "4.00µs");
    }
}
