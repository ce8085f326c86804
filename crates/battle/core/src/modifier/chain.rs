//! Ordered composition of scalar transforms.

/// Anything that maps one scalar to another.
pub trait ValueTransform {
    fn transform(&self, value: f32) -> f32;
}

/// Threads `value` through every transform in iteration order.
pub fn fold_transforms<'a, T, I>(value: f32, links: I) -> f32
where
    T: ValueTransform + 'a,
    I: IntoIterator<Item = &'a T>,
{
    links
        .into_iter()
        .fold(value, |acc, link| link.transform(acc))
}
