use std::ops;

use crate::dims::Dims;

/// Flat row-major storage for a rectangular grid of `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        let Dims(x, y) = pos;
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, width: usize, height: usize) -> Self {
        Self {
            buf: vec![item.clone(); width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indexing_is_row_major() {
        let mut array = Array2D::new(0, 3, 2);
        array[Dims(2, 0)] = 1;
        array[Dims(0, 1)] = 2;

        assert_eq!(array.dim_to_idx(Dims(2, 0)), Some(2));
        assert_eq!(array.dim_to_idx(Dims(0, 1)), Some(3));
        assert_eq!(array[Dims(2, 0)], 1);
        assert_eq!(array[Dims(0, 1)], 2);
        assert_eq!(array.idx_to_dim(5), Some(Dims(2, 1)));
    }

    #[test]
    fn out_of_bounds_is_none() {
        let array = Array2D::new(0, 3, 3);
        assert_eq!(array.get(Dims(-1, 0)), None);
        assert_eq!(array.get(Dims(0, -1)), None);
        assert_eq!(array.get(Dims(3, 0)), None);
        assert_eq!(array.get(Dims(0, 3)), None);
        assert_eq!(array.dim_to_idx(Dims(3, 2)), None);
    }
}
