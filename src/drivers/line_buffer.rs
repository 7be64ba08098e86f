/// Fixed capacity, NUL-terminated byte buffer for one line of serial text
pub struct LineBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> LineBuffer<N> {
    /// An empty line; every byte starts out as NUL
    pub const fn new() -> Self {
        Self { data: [0; N] }
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The whole backing storage, for filling by the converter or a line read
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Contents up to, not including, the first NUL
    pub fn text(&self) -> &[u8] {
        let len = self.data.iter().position(|&b| b == 0).unwrap_or(N);
        &self.data[..len]
    }

    pub fn clear(&mut self) {
        if let Some(first) = self.data.first_mut() {
            *first = 0;
        }
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
