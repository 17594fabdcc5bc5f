/// A valid tile type.
///
/// This trait is so named because other things may wish to use tiles.
///
/// Tiles must be `Eq` and `Hash`, since they key the collision registry.  Practically this means tile symbols, ids, or
/// small enums: no floating point.  `Debug` is required so that configuration misses can be logged.
pub trait TileTrait: std::cmp::Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static {}

/// Tile maps loaded from configuration use the symbol from the map text directly.
impl TileTrait for String {}

macro_rules! int_tiles {
    ($($t: ty),*) => {
        $(impl TileTrait for $t {})*
    }
}

int_tiles!(u8, u16, u32, u64, i8, i16, i32, i64, usize);
