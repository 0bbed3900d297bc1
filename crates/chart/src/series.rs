//! Sorted series storage and downsampling.

use pattern::DataPoint;

/// Points kept in ascending timestamp order.
///
/// Points with equal timestamps keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesStore {
    points: Vec<DataPoint>,
}

impl SeriesStore {
    /// Take ownership of `points` and sort them.
    pub fn new(mut points: Vec<DataPoint>) -> Self {
        points.sort_by_key(|p| p.timestamp);
        Self { points }
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn values(&self) -> Vec<f64> {
        pattern::values(&self.points)
    }

    /// Insert after any existing points with the same timestamp.
    pub fn push(&mut self, point: DataPoint) {
        let index = self
            .points
            .partition_point(|p| p.timestamp <= point.timestamp);
        self.points.insert(index, point);
    }

    /// Drop the earliest point. Returns false when the store is empty.
    pub fn remove_oldest(&mut self) -> bool {
        if self.points.is_empty() {
            return false;
        }
        self.points.remove(0);
        true
    }

    /// Overwrite the earliest point and restore the ordering. Returns false
    /// when the store is empty.
    pub fn replace_oldest(&mut self, point: DataPoint) -> bool {
        let Some(first) = self.points.first_mut() else {
            return false;
        };
        *first = point;
        self.points.sort_by_key(|p| p.timestamp);
        true
    }
}

/// Average consecutive clusters of `floor(len / width)` points.
///
/// Timestamp and value are both averaged; a shorter tail cluster is averaged
/// on its own. When the cluster size is 1 or less the points come back
/// unchanged.
pub fn downsample(points: &[DataPoint], width: usize) -> Vec<DataPoint> {
    let cluster_size = if width == 0 { 0 } else { points.len() / width };
    if cluster_size <= 1 {
        return points.to_vec();
    }

    points
        .chunks(cluster_size)
        .map(|cluster| {
            let count = cluster.len();
            let timestamp = cluster.iter().map(|p| p.timestamp as i128).sum::<i128>() / count as i128;
            let value = cluster.iter().map(|p| p.value).sum::<f64>() / count as f64;
            DataPoint::new(timestamp as i64, value)
        })
        .collect()
}
