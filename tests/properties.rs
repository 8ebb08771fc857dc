use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use strided_numeric::blas::{
    ccopy, csrot, dnrm2, dnrm2_ndarray, drot, dspr, dsyr2, gcopy, gswap, packed_index, packed_len,
    sspr, zdrot, Order, Uplo,
};

const ORDERS: [Order; 2] = [Order::RowMajor, Order::ColMajor];
const UPLOS: [Uplo; 2] = [Uplo::Upper, Uplo::Lower];

fn random_vec(rng: &mut StdRng, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1.0..1.0)).collect()
}

fn element(order: Order, lda: usize, i: usize, j: usize) -> usize {
    match order {
        Order::RowMajor => i * lda + j,
        Order::ColMajor => i + j * lda,
    }
}

#[test]
fn test_copy_negative_stride_reverses() {
    let mut rng = StdRng::seed_from_u64(1);
    for n in [1, 2, 7, 16] {
        let x = random_vec(&mut rng, n);
        let mut y = vec![0.0; n];
        gcopy(n, &x[..], -1, &mut y[..], 1).unwrap();
        let reversed: Vec<f64> = x.iter().rev().copied().collect();
        assert_eq!(y, reversed);
    }
}

#[test]
fn test_swap_twice_is_identity() {
    let mut rng = StdRng::seed_from_u64(2);
    let x0 = random_vec(&mut rng, 12);
    let y0 = random_vec(&mut rng, 6);
    let mut x = x0.clone();
    let mut y = y0.clone();
    gswap(6, &mut x[..], 2, &mut y[..], -1).unwrap();
    assert_ne!(x, x0);
    gswap(6, &mut x[..], 2, &mut y[..], -1).unwrap();
    assert_eq!(x, x0);
    assert_eq!(y, y0);
}

#[test]
fn test_nrm2_matches_naive_and_ignores_stride_sign() {
    let mut rng = StdRng::seed_from_u64(3);
    for n in [1, 5, 33, 100] {
        let x = random_vec(&mut rng, 2 * n);
        let naive = (0..n).map(|i| x[2 * i] * x[2 * i]).sum::<f64>().sqrt();
        let forward = dnrm2(n, &x, 2).unwrap();
        let backward = dnrm2(n, &x, -2).unwrap();
        let explicit = dnrm2_ndarray(n, &x, -2, 2 * (n - 1)).unwrap();
        assert_relative_eq!(forward, naive, max_relative = 1e-12);
        assert_relative_eq!(backward, forward, max_relative = 1e-12);
        assert_eq!(explicit, backward);
    }
}

#[test]
fn test_nrm2_no_overflow() {
    let x = [1e300, 1e300];
    assert_relative_eq!(dnrm2(2, &x, 1).unwrap(), 1e300 * 2f64.sqrt(), max_relative = 1e-12);
}

#[test]
fn test_rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..8 {
        let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        let (s, c) = theta.sin_cos();
        let x0 = random_vec(&mut rng, 10);
        let y0 = random_vec(&mut rng, 10);

        let (mut x, mut y) = (x0.clone(), y0.clone());
        drot(10, &mut x, 1, &mut y, -1, c, s).unwrap();
        drot(10, &mut x, 1, &mut y, -1, c, -s).unwrap();
        for i in 0..10 {
            assert_relative_eq!(x[i], x0[i], epsilon = 1e-12);
            assert_relative_eq!(y[i], y0[i], epsilon = 1e-12);
        }

        let (mut zx, mut zy) = (x0.clone(), y0.clone());
        zdrot(5, &mut zx, 1, &mut zy, 1, c, s).unwrap();
        zdrot(5, &mut zx, 1, &mut zy, 1, c, -s).unwrap();
        for i in 0..10 {
            assert_relative_eq!(zx[i], x0[i], epsilon = 1e-12);
            assert_relative_eq!(zy[i], y0[i], epsilon = 1e-12);
        }
    }
}

#[test]
fn test_dspr_matches_dense_update() {
    let mut rng = StdRng::seed_from_u64(5);
    let n = 6;
    let x = random_vec(&mut rng, n);
    let alpha = 0.75;
    for order in ORDERS {
        for uplo in UPLOS {
            let ap0 = random_vec(&mut rng, packed_len(n));
            let mut ap = ap0.clone();
            dspr(order, uplo, n, alpha, &x, 1, &mut ap).unwrap();
            for j in 0..n {
                for i in uplo.rows(n, j) {
                    let k = packed_index(order, uplo, n, i, j);
                    assert_relative_eq!(ap[k], ap0[k] + alpha * x[i] * x[j], epsilon = 1e-12);
                }
            }
        }
    }
}

#[test]
fn test_dsyr2_touches_only_selected_triangle() {
    let mut rng = StdRng::seed_from_u64(6);
    let n = 5;
    let lda = 7;
    let x = random_vec(&mut rng, n);
    let y = random_vec(&mut rng, 2 * n);
    let alpha = -1.5;
    for order in ORDERS {
        for uplo in UPLOS {
            let a0 = random_vec(&mut rng, lda * n);
            let mut a = a0.clone();
            dsyr2(order, uplo, n, alpha, &x, 1, &y, 2, &mut a, lda).unwrap();
            for j in 0..n {
                for i in 0..n {
                    let k = element(order, lda, i, j);
                    if uplo.contains(i, j) {
                        let update = alpha * x[i] * y[2 * j] + alpha * y[2 * i] * x[j];
                        assert_relative_eq!(a[k], a0[k] + update, epsilon = 1e-12);
                    } else {
                        assert_eq!(a[k], a0[k]);
                    }
                }
            }
            // Padding rows or columns beyond n.
            for k in 0..a.len() {
                let (major, minor) = (k / lda, k % lda);
                if minor >= n || major >= n {
                    assert_eq!(a[k], a0[k]);
                }
            }
        }
    }
}

#[test]
fn test_degenerate_calls_are_noops() {
    let x = [f64::NAN; 4];
    let mut ap = [1.0; 10];
    dspr(Order::ColMajor, Uplo::Upper, 4, 0.0, &x, 1, &mut ap).unwrap();
    assert_eq!(ap, [1.0; 10]);
    dspr(Order::ColMajor, Uplo::Upper, 0, 1.0, &x, 1, &mut ap).unwrap();
    assert_eq!(ap, [1.0; 10]);

    let mut a = [2.0; 16];
    dsyr2(Order::RowMajor, Uplo::Lower, 4, 0.0, &x, 1, &x, 1, &mut a, 4).unwrap();
    assert_eq!(a, [2.0; 16]);

    let mut y = [3.0; 4];
    let mut z = [4.0; 4];
    drot(0, &mut y, 1, &mut z, 1, 0.0, 1.0).unwrap();
    assert_eq!((y, z), ([3.0; 4], [4.0; 4]));
    gcopy(0, &x[..], 1, &mut y[..], 1).unwrap();
    assert_eq!(y, [3.0; 4]);
}

#[test]
fn test_noops_return_the_output_buffer() {
    let x = [1.0f32; 6];
    let mut y = [7.0f32; 6];
    let y_ptr = y.as_ptr();
    let out = ccopy(0, &x, 1, &mut y, 1).unwrap();
    assert!(std::ptr::eq(out.as_ptr(), y_ptr));
    assert_eq!(out, &[7.0; 6]);

    let mut cx = [1.0f32; 4];
    let mut cy = [2.0f32; 4];
    let cy_ptr = cy.as_ptr();
    let out = csrot(0, &mut cx, 1, &mut cy, -1, 0.8, 0.6).unwrap();
    assert!(std::ptr::eq(out.as_ptr(), cy_ptr));
    assert_eq!(out, &[2.0; 4]);
    assert_eq!(cx, [1.0; 4]);

    let mut ap = [3.0f32; 3];
    let ap_ptr = ap.as_ptr();
    let out = sspr(Order::RowMajor, Uplo::Lower, 0, 1.0, &x, 1, &mut ap).unwrap();
    assert!(std::ptr::eq(out.as_ptr(), ap_ptr));
    let out = sspr(Order::RowMajor, Uplo::Lower, 2, 0.0, &x, 1, out).unwrap();
    assert!(std::ptr::eq(out.as_ptr(), ap_ptr));
    assert_eq!(out, &[3.0; 3]);
}
