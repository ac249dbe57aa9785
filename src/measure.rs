//! Deep memory footprint estimation.
//!
//! [`DeepSize::deep_size`] walks a value's ownership graph and sums the shallow
//! size of the value plus every heap allocation reachable from it. A
//! [`SizeContext`] tracks the addresses of allocations already counted, so
//! values shared through `Rc`/`Arc` contribute once and reference cycles
//! terminate instead of recursing forever.
//!
//! The numbers are estimates in the same spirit as a recursive `sizeof`: spare
//! `Vec`/`String` capacity counts as owned bytes, and hash-table overhead is
//! approximated from the table's capacity.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::mem;
use std::rc::Rc;
use std::sync::Arc;

/// Tracks which heap allocations have already been counted during one
/// [`DeepSize::deep_size`] traversal.
#[derive(Debug, Default)]
pub struct SizeContext {
    visited: HashSet<usize>,
}

impl SizeContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an allocation address as counted.
    ///
    /// Returns `true` on the first visit; subsequent visits return `false` and
    /// the caller must contribute zero additional bytes for that allocation.
    pub fn visit(&mut self, address: usize) -> bool {
        self.visited.insert(address)
    }
}

/// Estimates the total memory footprint of a value.
///
/// Implementors only describe their owned heap allocations; the shallow
/// (inline) size is added by the provided [`deep_size`] method.
///
/// # Examples
///
/// ```
/// use sortmeter::measure::DeepSize;
///
/// let words = vec!["apple".to_string(), "banana".to_string()];
/// // Vec header + 2 String headers + 11 bytes of character data.
/// assert!(words.deep_size() > size_of::<Vec<String>>());
/// ```
///
/// [`deep_size`]: DeepSize::deep_size
pub trait DeepSize {
    /// Bytes of heap memory owned by this value, beyond its inline size.
    ///
    /// Every heap allocation must be registered with [`SizeContext::visit`]
    /// before being counted, and skipped entirely when already visited.
    fn heap_size(&self, ctx: &mut SizeContext) -> usize;

    /// Total estimated footprint: inline size plus reachable heap bytes.
    fn deep_size(&self) -> usize {
        mem::size_of_val(self) + self.heap_size(&mut SizeContext::new())
    }
}

macro_rules! leaf_deep_size {
    ($($t:ty),* $(,)?) => {
        $(
            impl DeepSize for $t {
                fn heap_size(&self, _ctx: &mut SizeContext) -> usize {
                    0
                }
            }
        )*
    };
}

leaf_deep_size!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool, char, ()
);

impl DeepSize for String {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        if self.capacity() == 0 || !ctx.visit(self.as_ptr() as usize) {
            return 0;
        }
        self.capacity()
    }
}

impl<T: DeepSize> DeepSize for Vec<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        if self.capacity() == 0 || !ctx.visit(self.as_ptr() as usize) {
            return 0;
        }
        let buffer = self.capacity() * mem::size_of::<T>();
        buffer + self.iter().map(|item| item.heap_size(ctx)).sum::<usize>()
    }
}

impl<T: DeepSize> DeepSize for Box<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        let inner: &T = self;
        if !ctx.visit(inner as *const T as usize) {
            return 0;
        }
        mem::size_of::<T>() + inner.heap_size(ctx)
    }
}

// Shared-pointer allocations hold two refcount words next to the value. The
// allocation is keyed by its address, so clones of the same Rc/Arc and cycles
// through RefCell contribute exactly once.
impl<T: DeepSize> DeepSize for Rc<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        if !ctx.visit(Rc::as_ptr(self) as usize) {
            return 0;
        }
        2 * mem::size_of::<usize>() + mem::size_of::<T>() + self.as_ref().heap_size(ctx)
    }
}

impl<T: DeepSize> DeepSize for Arc<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        if !ctx.visit(Arc::as_ptr(self) as usize) {
            return 0;
        }
        2 * mem::size_of::<usize>() + mem::size_of::<T>() + self.as_ref().heap_size(ctx)
    }
}

impl<T: DeepSize> DeepSize for RefCell<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        self.borrow().heap_size(ctx)
    }
}

impl<T: DeepSize> DeepSize for Option<T> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        self.as_ref().map_or(0, |value| value.heap_size(ctx))
    }
}

impl<K: DeepSize, V: DeepSize> DeepSize for HashMap<K, V> {
    fn heap_size(&self, ctx: &mut SizeContext) -> usize {
        if self.capacity() == 0 {
            return 0;
        }
        // One slot per capacity unit plus a control byte, then whatever the
        // keys and values themselves own.
        let table = self.capacity() * (mem::size_of::<(K, V)>() + 1);
        table
            + self
                .iter()
                .map(|(k, v)| k.heap_size(ctx) + v.heap_size(ctx))
                .sum::<usize>()
    }
}

macro_rules! tuple_deep_size {
    ($(($($name:ident : $idx:tt),+)),* $(,)?) => {
        $(
            impl<$($name: DeepSize),+> DeepSize for ($($name,)+) {
                fn heap_size(&self, ctx: &mut SizeContext) -> usize {
                    0 $(+ self.$idx.heap_size(ctx))+
                }
            }
        )*
    };
}

tuple_deep_size!((A: 0), (A: 0, B: 1), (A: 0, B: 1, C: 2));
