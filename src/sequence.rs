use crate::periodic::Periodic;
use crate::types::BlendError;
use heapless::Vec;

/// An ordered concatenation of periodic functions.
///
/// Members play back to back: the combined period is the sum of the member
/// periods, and insertion order decides which member owns each step of it.
///
/// # Type Parameters
/// * `F` - Member type (e.g. [`PeriodicFunction`](crate::PeriodicFunction))
/// * `N` - Maximum number of members this sequence can hold
#[derive(Debug, Clone)]
pub struct FunctionSequence<F: Periodic, const N: usize> {
    funcs: Vec<F, N>,
    period: u32,
}

impl<F: Periodic, const N: usize> FunctionSequence<F, N> {
    /// Creates an empty sequence with a period of zero.
    pub const fn new() -> Self {
        Self {
            funcs: Vec::new(),
            period: 0,
        }
    }

    /// Replaces every member of the sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - More than `N` functions were given. The
    ///   sequence is left unchanged.
    pub fn set_funcs<I>(&mut self, funcs: I) -> Result<(), BlendError>
    where
        I: IntoIterator<Item = F>,
    {
        let mut replacement = Vec::new();
        for f in funcs {
            replacement
                .push(f)
                .map_err(|_| BlendError::CapacityExceeded)?;
        }

        self.funcs = replacement;
        self.update_period();
        Ok(())
    }

    /// Appends a function to the end of the sequence.
    ///
    /// # Errors
    /// * `CapacityExceeded` - The sequence already holds `N` functions
    pub fn append(&mut self, f: F) -> Result<(), BlendError> {
        let period = f.period();
        self.funcs
            .push(f)
            .map_err(|_| BlendError::CapacityExceeded)?;
        self.period = self.period.saturating_add(period);
        Ok(())
    }

    fn update_period(&mut self) {
        self.period = self
            .funcs
            .iter()
            .fold(0u32, |total, f| total.saturating_add(f.period()));
    }

    /// Returns the combined period (sum of member periods).
    #[inline]
    pub fn period(&self) -> u32 {
        self.period
    }

    /// Resolves an absolute step to the owning member and its local step.
    ///
    /// A step that falls exactly on the boundary between two members belongs
    /// to the earlier one, so the returned local step may equal that
    /// member's period.
    ///
    /// Returns `None` if the sequence is empty.
    pub fn member_index(&self, step: i64) -> Option<(usize, i64)> {
        if self.funcs.is_empty() {
            return None;
        }

        let min_step = if self.period == 0 {
            0
        } else {
            step.rem_euclid(self.period as i64)
        };

        let mut boundary: i64 = 0;
        for (index, f) in self.funcs.iter().enumerate() {
            let upper = boundary + f.period() as i64;
            if min_step <= upper {
                return Some((index, min_step - boundary));
            }
            boundary = upper;
        }

        // min_step < period, so the last member always matches
        None
    }

    /// Evaluates the sequence at an absolute step.
    ///
    /// # Returns
    /// * `Some((value, member))` - The function value and the member that produced it
    /// * `None` - The sequence has no functions
    pub fn value_at(&self, step: i64) -> Option<(f32, &F)> {
        let (index, local_step) = self.member_index(step)?;
        let f = &self.funcs[index];
        Some((f.value_at(local_step), f))
    }

    /// Returns the number of functions in this sequence.
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    /// Returns true if the sequence holds no functions.
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Returns a reference to the function at the given index.
    pub fn get(&self, index: usize) -> Option<&F> {
        self.funcs.get(index)
    }

    /// Iterates over the functions in insertion order.
    pub fn iter(&self) -> core::slice::Iter<'_, F> {
        self.funcs.iter()
    }
}

impl<F: Periodic, const N: usize> Default for FunctionSequence<F, N> {
    fn default() -> Self {
        Self::new()
    }
}
