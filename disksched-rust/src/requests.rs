/// The pending requests, in arrival order, together with an ascending copy.
///
/// FCFS and SSTF walk the arrival order. The sweep algorithms walk the sorted copy, which
/// is built once here so every algorithm shares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSet {
    arrival: Vec<usize>,
    sorted: Vec<usize>,
}

impl RequestSet {
    pub fn new(arrival: Vec<usize>) -> Self {
        let mut sorted = arrival.clone();
        sorted.sort_unstable();
        RequestSet { arrival, sorted }
    }

    pub fn arrival(&self) -> &[usize] {
        &self.arrival
    }

    pub fn sorted(&self) -> &[usize] {
        &self.sorted
    }

    pub fn len(&self) -> usize {
        self.arrival.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrival.is_empty()
    }
}

impl From<Vec<usize>> for RequestSet {
    fn from(arrival: Vec<usize>) -> Self {
        RequestSet::new(arrival)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn sorted_copy_keeps_arrival_order_intact() {
        let requests = RequestSet::new(vec![98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(requests.arrival(), &[98, 183, 37, 122, 14, 124, 65, 67]);
        assert_eq!(requests.sorted(), &[14, 37, 65, 67, 98, 122, 124, 183]);
        assert_eq!(requests.len(), 8);
        assert!(!requests.is_empty());
    }

    #[test]
    fn duplicates_survive_sorting() {
        let requests = RequestSet::from(vec![5, 1, 5, 1]);
        assert_eq!(requests.sorted(), &[1, 1, 5, 5]);
    }
}
