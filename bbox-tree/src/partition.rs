/// Reorders `items` in place so that every item whose key is `<= split` comes
/// before every item whose key is `> split`, returning the index of the first
/// item of the second group.
///
/// This is the single-pass, quicksort-style partition: two cursors converge
/// from both ends and swap pairs that sit on the wrong side, stopping once
/// they cross.
pub fn partition<T, K>(
    items: &mut [T],
    split: K,
    mut key: impl FnMut(&T) -> K,
) -> usize
where
    K: PartialOrd,
{
    if items.is_empty() {
        return 0;
    }

    let mut left = 0;
    let mut right = items.len();

    loop {
        while left < right && key(&items[left]) <= split {
            left += 1;
        }

        while left < right && key(&items[right - 1]) > split {
            right -= 1;
        }

        if left + 1 < right {
            items.swap(left, right - 1);
            left += 1;
            right -= 1;
        } else {
            break left;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(mut items: Vec<f32>, split: f32) -> (usize, Vec<f32>) {
        let mut sorted = items.clone();
        let pivot = partition(&mut items, split, |item| *item);

        assert!(items[..pivot].iter().all(|item| *item <= split));
        assert!(items[pivot..].iter().all(|item| *item > split));

        // Partitioning must only shuffle things around
        let mut actual = items.clone();

        sorted.sort_by(f32::total_cmp);
        actual.sort_by(f32::total_cmp);

        assert_eq!(sorted, actual);

        (pivot, items)
    }

    #[test]
    fn simple() {
        assert_eq!(
            (2, vec![0.0, 1.0, 10.0, 11.0]),
            check(vec![0.0, 1.0, 10.0, 11.0], 5.5),
        );

        assert_eq!(
            (2, vec![1.0, 0.0, 10.0, 11.0]),
            check(vec![11.0, 0.0, 10.0, 1.0], 5.5),
        );

        assert_eq!(
            (2, vec![1.0, 0.0, 10.0, 11.0]),
            check(vec![11.0, 10.0, 0.0, 1.0], 5.5),
        );
    }

    #[test]
    fn one_sided() {
        assert_eq!(3, check(vec![1.0, 2.0, 3.0], 3.0).0);
        assert_eq!(0, check(vec![1.0, 2.0, 3.0], 0.5).0);
        assert_eq!(0, partition(&mut Vec::<f32>::new(), 0.0, |item| *item));
    }

    #[test]
    fn ties_go_left() {
        assert_eq!(4, check(vec![2.0, 1.0, 2.0, 3.0, 2.0], 2.0).0);
        assert_eq!(1, check(vec![5.0, 1.0], 1.0).0);
    }

    #[test]
    fn keys() {
        let centroids = [10.0, 0.0, 11.0, 1.0];
        let mut ids = vec![0, 1, 2, 3];
        let pivot = partition(&mut ids, 5.5, |id| centroids[*id]);

        assert_eq!(2, pivot);
        assert_eq!(vec![3, 1, 2, 0], ids);
    }
}
