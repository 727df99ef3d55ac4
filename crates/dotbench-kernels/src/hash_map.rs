use crate::error::{check_shapes, KernelError};
use crate::strategy::RowDotSparse;
use crate::util::UsizeF64Map;
use dotbench_core::{i64_to_usize, Csr, RowView, SparseVec};

/// Weight vector indexed once into a hash map; each row nonzero is one probe.
pub struct HashMapDot {
    map: UsizeF64Map,
}

impl HashMapDot {
    #[must_use]
    pub fn new(w: &SparseVec) -> Self {
        let mut map = UsizeF64Map::for_entries(w.nnz());
        for (j, v) in w.view().iter() {
            map.insert_add(i64_to_usize(j), v);
        }
        Self { map }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl RowDotSparse for HashMapDot {
    #[inline]
    fn row_dot(&self, row: RowView<'_>) -> f64 {
        if self.map.is_empty() {
            return 0.0;
        }
        let mut acc = 0.0f64;
        for (j, v) in row.iter() {
            if let Some(wj) = self.map.get(i64_to_usize(j)) {
                acc += v * wj;
            }
        }
        acc
    }
}

/// out = A @ w, probing a hash map built from `w` once for the whole call.
pub fn sparse_sparse_hash_map_f64_i64(
    a: &Csr<f64, i64>,
    w: &SparseVec,
    out: &mut [f64],
) -> Result<(), KernelError> {
    check_shapes(a, w.dim, out)?;
    let k = HashMapDot::new(w);
    log::debug!(
        "hash map kernel: {} weights in {} slots",
        k.len(),
        k.map.capacity()
    );
    k.fill(a, out);
    Ok(())
}
