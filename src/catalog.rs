//! Region catalog for the default game map.
//!
//! Maps each resettable region to the pair of world-coordinate corners
//! that enclose it. Built once at startup and read-only afterwards.

/// World units covered by one persisted map cell (one `.bin` file).
pub const CELL_SIZE: i32 = 10;

/// A named rectangular area of the game world.
///
/// The corners are arbitrary opposite corners of the rectangle; no min/max
/// ordering is required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub name: String,
    pub corner1: (i32, i32),
    pub corner2: (i32, i32),
}

impl Region {
    pub fn new(name: &str, corner1: (i32, i32), corner2: (i32, i32)) -> Self {
        Self {
            name: name.to_string(),
            corner1,
            corner2,
        }
    }

    /// File names for every map cell the region covers.
    ///
    /// Cell indices are `floor(coord / 10)`; the ranges are half-open on the
    /// max edge, matching the grid convention where the max coordinate lies
    /// on a cell boundary. All y values for a given x are emitted before
    /// advancing x.
    pub fn cell_files(&self) -> Vec<String> {
        let xmin = self.corner1.0.min(self.corner2.0).div_euclid(CELL_SIZE);
        let xmax = self.corner1.0.max(self.corner2.0).div_euclid(CELL_SIZE);
        let ymin = self.corner1.1.min(self.corner2.1).div_euclid(CELL_SIZE);
        let ymax = self.corner1.1.max(self.corner2.1).div_euclid(CELL_SIZE);

        let mut files = Vec::new();
        for x in xmin..xmax {
            for y in ymin..ymax {
                files.push(format!("map_{}_{}.bin", x, y));
            }
        }
        files
    }
}

/// Insertion-ordered, read-only collection of the regions the user can
/// select. Vec-backed so `names` stays stable across runs.
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    /// Region names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    /// All regions in insertion order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Case-insensitive lookup by name.
    pub fn lookup(&self, name: &str) -> Option<&Region> {
        let name = name.to_lowercase();
        self.regions.iter().find(|r| r.name == name)
    }
}

impl Default for RegionCatalog {
    /// The major towns of the default map and the coordinate pairs that
    /// enclose them.
    fn default() -> Self {
        Self::new(vec![
            Region::new("muldraugh", (10580, 10680), (11090, 8800)),
            Region::new("rosewood", (7900, 11800), (8500, 11200)),
            Region::new("westpoint", (11090, 7000), (12200, 6600)),
            Region::new("riverside", (5800, 5600), (6860, 5180)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_files_for_two_by_two_region() {
        let region = Region::new("test", (0, 0), (20, 20));
        assert_eq!(
            region.cell_files(),
            vec!["map_0_0.bin", "map_0_1.bin", "map_1_0.bin", "map_1_1.bin"]
        );
    }

    #[test]
    fn test_cell_files_corner_order_independent() {
        let a = Region::new("a", (10580, 10680), (11090, 8800));
        let b = Region::new("b", (11090, 8800), (10580, 10680));
        assert_eq!(a.cell_files(), b.cell_files());
    }

    #[test]
    fn test_cell_files_floor_negative_coordinates() {
        let region = Region::new("test", (-20, -20), (0, 0));
        assert_eq!(
            region.cell_files(),
            vec![
                "map_-2_-2.bin",
                "map_-2_-1.bin",
                "map_-1_-2.bin",
                "map_-1_-1.bin"
            ]
        );

        // -15 is in cell -2, not -1
        let off_grid = Region::new("test", (-15, -15), (-5, -5));
        assert_eq!(off_grid.cell_files(), vec!["map_-2_-2.bin"]);
    }

    #[test]
    fn test_cell_files_empty_when_region_fits_in_one_cell() {
        let region = Region::new("test", (5, 5), (7, 7));
        assert!(region.cell_files().is_empty());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = RegionCatalog::default();
        let region = catalog.lookup("MULDRAUGH").unwrap();
        assert_eq!(region.name, "muldraugh");
        assert_eq!(region.corner1, (10580, 10680));
    }

    #[test]
    fn test_lookup_unknown_name() {
        let catalog = RegionCatalog::default();
        assert!(catalog.lookup("bogus").is_none());
    }

    #[test]
    fn test_names_keep_insertion_order() {
        let catalog = RegionCatalog::default();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["muldraugh", "rosewood", "westpoint", "riverside"]);
    }
}
