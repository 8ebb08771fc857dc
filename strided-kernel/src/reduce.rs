//! Reduce operations on one-dimensional strided views.

use strided_view::{Buffer, StridedView};

/// Sequential left fold: `f(...f(f(init, x[0]), x[1])..., x[n-1])`.
///
/// Returns `init` unchanged for an empty view.
pub fn fold<B, U>(src: &StridedView<'_, B>, init: U, mut f: impl FnMut(U, B::Elem) -> U) -> U
where
    B: Buffer + ?Sized,
{
    let len = src.len();
    let mut acc = init;
    if let Some(raw) = src.buffer().as_raw() {
        if src.stride() == 1 {
            let start = src.offset();
            for &v in &raw[start..start + len] {
                acc = f(acc, v);
            }
        } else {
            for i in 0..len {
                acc = f(acc, raw[src.index_of(i)]);
            }
        }
        return acc;
    }
    for i in 0..len {
        acc = f(acc, src.get(i));
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use strided_view::ComplexSlice;

    #[test]
    fn test_fold_order() {
        let data = [1, 2, 3, 4];
        let v = StridedView::with_stride(&data[..], 4, -1).unwrap();
        let seen = fold(&v, Vec::new(), |mut acc, x| {
            acc.push(x);
            acc
        });
        assert_eq!(seen, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_fold_empty_returns_init() {
        let data: [f64; 0] = [];
        let v = StridedView::with_stride(&data[..], 0, 1).unwrap();
        assert_eq!(fold(&v, 7.5, |a, x| a + x), 7.5);
    }

    #[test]
    fn test_fold_complex_accessor() {
        let flat = [3.0f32, 4.0, 0.0, 0.0, 1.0, 1.0];
        let buf = ComplexSlice::new(&flat[..]).unwrap();
        let v = StridedView::with_stride(&buf, 2, 2).unwrap();
        let sum = fold(&v, 0.0f32, |a, z| a + z.norm_sqr());
        assert_relative_eq!(sum, 27.0);
    }
}
