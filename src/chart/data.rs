// src/chart/data.rs
//
// Backend-agnostic chart input. Only constructible from a non-empty table,
// so `max()` and friends never look at an empty sequence.

use crate::analysis::FilteredTable;
use crate::error::PipelineError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartPoint {
    /// 1-based position in the ranked table.
    pub rank: u32,
    pub label: String,
    pub value: u32,
}

/// One radar spoke. `max` is the global maximum, shared by all spokes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadarAxis {
    pub name: String,
    pub value: u32,
    pub max: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartDataset {
    title: String,
    points: Vec<ChartPoint>,
    max: u32,
}

impl ChartDataset {
    pub fn from_table(table: &FilteredTable, title: &str) -> Result<Self, PipelineError> {
        ensure_nonempty!(table, PipelineError::EmptyData);

        let points: Vec<ChartPoint> = table
            .iter()
            .enumerate()
            .map(|(i, e)| ChartPoint { rank: i as u32 + 1, label: e.token.clone(), value: e.count })
            .collect();
        let max = points.iter().map(|p| p.value).max().unwrap_or(0);

        Ok(Self { title: s!(title), points, max })
    }

    pub fn title(&self) -> &str { &self.title }
    pub fn points(&self) -> &[ChartPoint] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn max(&self) -> u32 { self.max }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.value).collect()
    }

    pub fn ranks(&self) -> Vec<u32> {
        self.points.iter().map(|p| p.rank).collect()
    }

    /// Stable sort by value, largest first.
    pub fn descending(&self) -> Vec<&ChartPoint> {
        let mut v: Vec<&ChartPoint> = self.points.iter().collect();
        v.sort_by(|a, b| b.value.cmp(&a.value));
        v
    }

    /// One spoke per token, all scaled to the global max.
    pub fn radar_axes(&self) -> Vec<RadarAxis> {
        self.points
            .iter()
            .map(|p| RadarAxis { name: p.label.clone(), value: p.value, max: self.max })
            .collect()
    }

    /// Marker/font size in `lo..=hi`, proportional to `value / max`.
    pub fn scaled(&self, value: u32, lo: f64, hi: f64) -> f64 {
        let max = self.max.max(1) as f64;
        lo + (hi - lo) * (value as f64 / max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{filter, FrequencyTable};

    fn dataset(pairs: Vec<(&str, u32)>) -> Result<ChartDataset, PipelineError> {
        let table = FrequencyTable::from_ranked(pairs, 20);
        ChartDataset::from_table(&filter(&table, 1), "t")
    }

    #[test]
    fn empty_table_is_empty_data() {
        assert!(matches!(dataset(vec![]), Err(PipelineError::EmptyData)));
    }

    #[test]
    fn ranks_start_at_one() {
        let d = dataset(vec![("a", 4), ("b", 2), ("c", 1)]).unwrap();
        assert_eq!(d.ranks(), vec![1, 2, 3]);
        assert_eq!(d.max(), 4);
        assert_eq!(d.labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn radar_axes_share_global_max() {
        let d = dataset(vec![("a", 4), ("b", 2)]).unwrap();
        let axes = d.radar_axes();
        assert_eq!(axes.len(), 2);
        assert!(axes.iter().all(|a| a.max == 4));
        assert_eq!((axes[1].name.as_str(), axes[1].value), ("b", 2));
    }

    #[test]
    fn scaled_spans_the_range() {
        let d = dataset(vec![("a", 4), ("b", 2)]).unwrap();
        assert_eq!(d.scaled(4, 10.0, 50.0), 50.0);
        assert_eq!(d.scaled(2, 10.0, 50.0), 30.0);
    }
}
