use num_bigint::BigUint;

/// Abstract source of an interpolation point used during recovery.
pub trait PointSource {
    /// The x-coordinate of this point.
    fn x(&self) -> &BigUint;

    /// The y-coordinate of this point.
    fn y(&self) -> &BigUint;
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> &BigUint {
        (**self).x()
    }

    fn y(&self) -> &BigUint {
        (**self).y()
    }
}

impl PointSource for (BigUint, BigUint) {
    fn x(&self) -> &BigUint {
        &self.0
    }

    fn y(&self) -> &BigUint {
        &self.1
    }
}
