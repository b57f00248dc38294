// SPDX-License-Identifier: LGPL-2.1-or-later
// See Notices.txt for copyright information

use lazy_static::lazy_static;
use std::thread;

lazy_static! {
    /// hardware concurrency, or 1 if it can't be detected
    pub static ref HARDWARE_CONCURRENCY: usize = thread::available_parallelism()
        .map(|v| v.get())
        .unwrap_or(1);
}

pub const DEFAULT_SPARSE_THRESHOLD: f64 = 0.2;

/// below this many terms a polynomial always counts as sparse
pub const DEFAULT_MIN_DENSE_TERMS: usize = 100;

/// term-pair products below which the direct multiplier stays on the calling thread
pub const DEFAULT_PARALLEL_MIN_PRODUCTS: usize = 1 << 14;

/// Which multiplier a product is computed with.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Strategy {
    /// pick per call from the density of both operands
    Auto,
    /// always use term-pair convolution
    Direct,
    /// always use the FFT
    Transform,
}

impl Default for Strategy {
    fn default() -> Strategy {
        Strategy::Auto
    }
}

/// Knobs for the multiplication engine; see [`Polynomial::mul_with`](crate::Polynomial::mul_with).
#[derive(Clone, PartialEq, Debug)]
pub struct MulConfig {
    pub strategy: Strategy,
    pub sparse_threshold: f64,
    pub min_dense_terms: usize,
    /// worker threads for the direct multiplier, at least 1
    pub workers: usize,
    pub parallel_min_products: usize,
    /// route dense operands whose products could lose `f64` exactness to the direct path
    pub exactness_guard: bool,
}

impl Default for MulConfig {
    fn default() -> Self {
        MulConfig {
            strategy: Strategy::Auto,
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
            min_dense_terms: DEFAULT_MIN_DENSE_TERMS,
            workers: *HARDWARE_CONCURRENCY,
            parallel_min_products: DEFAULT_PARALLEL_MIN_PRODUCTS,
            exactness_guard: true,
        }
    }
}

impl MulConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
    pub fn with_sparse_threshold(mut self, sparse_threshold: f64) -> Self {
        self.sparse_threshold = sparse_threshold;
        self
    }
    pub fn with_min_dense_terms(mut self, min_dense_terms: usize) -> Self {
        self.min_dense_terms = min_dense_terms;
        self
    }
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }
    pub fn with_parallel_min_products(mut self, parallel_min_products: usize) -> Self {
        self.parallel_min_products = parallel_min_products;
        self
    }
    pub fn with_exactness_guard(mut self, exactness_guard: bool) -> Self {
        self.exactness_guard = exactness_guard;
        self
    }
    pub(crate) fn worker_count(&self) -> usize {
        self.workers.max(1)
    }
}
