use log::debug;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use crate::config::RandomConfig;
use crate::error::MatrixError;
use crate::math::Matrix;

impl Matrix {
    /// `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn identity(n: usize) -> Matrix {
        let mut m = Matrix::new(n, n);
        let data = m.as_mut_slice();
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        m
    }

    /// Matrix of integer-valued entries drawn uniformly from `[min, max)`
    /// using the thread-local generator.
    pub fn random(rows: usize, cols: usize, min: i64, max: i64) -> Result<Matrix, MatrixError> {
        Self::random_with_rng(rows, cols, min, max, &mut thread_rng())
    }

    /// Same as [`Matrix::random`] but draws from the given generator, so a
    /// seeded generator gives reproducible matrices.
    pub fn random_with_rng<R>(
        rows: usize,
        cols: usize,
        min: i64,
        max: i64,
        rng: &mut R,
    ) -> Result<Matrix, MatrixError>
    where
        R: Rng + ?Sized,
    {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidShape { rows, cols, len: 0 });
        }
        if min >= max {
            return Err(MatrixError::EmptyRange { min, max });
        }
        let mut m = Matrix::new(rows, cols);
        for v in m.as_mut_slice().iter_mut() {
            *v = rng.gen_range(min..max) as f64;
        }
        Ok(m)
    }

    pub fn random_from_config(config: &RandomConfig) -> Result<Matrix, MatrixError> {
        debug!(
            "Generating random {}x{} matrix in [{}, {}) with seed {:?}",
            config.rows, config.cols, config.min, config.max, config.seed
        );
        match config.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::random_with_rng(config.rows, config.cols, config.min, config.max, &mut rng)
            }
            None => Self::random(config.rows, config.cols, config.min, config.max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_unit_diagonal() {
        let i = Matrix::identity(3);
        assert_eq!(i.as_slice(), &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn random_respects_half_open_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = Matrix::random_with_rng(20, 20, -3, 2, &mut rng).unwrap();
        for &v in m.as_slice() {
            assert!((-3.0..2.0).contains(&v));
            assert_eq!(v.fract(), 0.0);
        }
    }

    #[test]
    fn random_rejects_empty_range() {
        assert_eq!(
            Matrix::random(2, 2, 5, 5),
            Err(MatrixError::EmptyRange { min: 5, max: 5 })
        );
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let cfg = RandomConfig {
            seed: Some(42),
            ..RandomConfig::default()
        };
        let a = Matrix::random_from_config(&cfg).unwrap();
        let b = Matrix::random_from_config(&cfg).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.shape(), (cfg.rows, cfg.cols));
    }
}
