//! Pure heap repair passes over a raw value slice.
//!
//! The structural work lives in free functions so observability can stay
//! with the caller: each pass reports every exchange through an
//! `on_swap` callback instead of the heap knowing who is watching.
//! [`MaxHeap`](crate::heap::MaxHeap) passes a no-op; the visualization
//! wrapper records the pairs into its impacted set.

/// Index of the parent of node `i`. Only meaningful for `i > 0`.
pub fn parent(i: usize) -> usize {
    (i - 1) / 2
}

/// Index of the left child of node `i`.
pub fn left_child(i: usize) -> usize {
    2 * i + 1
}

/// Index of the right child of node `i`.
pub fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// Bubble the element at `index` up until the max-heap property holds.
///
/// Swaps while the element is strictly greater than its parent, stopping
/// at the root or at the first non-violating ancestor. `on_swap` receives
/// both indices of every exchange, child first. Returns the element's
/// final index.
pub fn sift_up(values: &mut [f64], mut index: usize, mut on_swap: impl FnMut(usize, usize)) -> usize {
    while index > 0 {
        let parent = parent(index);
        if values[index] > values[parent] {
            on_swap(index, parent);
            values.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
    index
}

/// Sink the element at `index` down until the max-heap property holds.
///
/// At each step the larger child is chosen; on equal children the left
/// one wins. The tie-break is part of the contract: it decides which
/// index shows up in an observer's swap trace. `on_swap` receives both
/// indices of every exchange, sinking node first. Returns the element's
/// final index.
pub fn sift_down(
    values: &mut [f64],
    mut index: usize,
    mut on_swap: impl FnMut(usize, usize),
) -> usize {
    let len = values.len();
    loop {
        let left = left_child(index);
        let right = right_child(index);
        let mut largest = index;

        if left < len && values[left] > values[largest] {
            largest = left;
        }
        if right < len && values[right] > values[largest] {
            largest = right;
        }
        if largest == index {
            break;
        }
        on_swap(index, largest);
        values.swap(index, largest);
        index = largest;
    }
    index
}
