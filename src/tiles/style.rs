use crate::tiles::grid::TileRef;

/// Background map style, selecting a tile server and its URL convention.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TileStyle {
    /// Artistic watercolor rendering.
    Watercolor,
    /// Dark theme (Stadia).
    Dark,
    /// Dark theme (CARTO).
    DarkMatter,
    /// Light theme (CARTO).
    Positron,
    /// High-contrast black and white (Stadia).
    Toner,
    /// Terrain with relief shading (Stadia).
    Terrain,
    /// Satellite imagery (ArcGIS).
    Satellite,
    /// OpenStreetMap standard.
    #[default]
    Osm,
    /// Bright OSM style (Stadia).
    OsmBright,
}

/// Order in which tile indices appear in a tile URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum IndexOrder {
    /// `/{z}/{col}/{row}`.
    ColRow,
    /// `/{z}/{row}/{col}`.
    RowCol,
}

/// URL template facts for one [`TileStyle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileSource {
    /// Base URL without trailing slash.
    pub base_url: &'static str,
    /// Index order in the path.
    pub order: IndexOrder,
    /// File extension including the dot, or empty.
    pub extension: &'static str,
    /// Whether the provider accepts an `api_key` query parameter.
    pub keyed: bool,
}

impl TileStyle {
    /// Every supported style, in declaration order.
    pub const ALL: [TileStyle; 9] = [
        TileStyle::Watercolor,
        TileStyle::Dark,
        TileStyle::DarkMatter,
        TileStyle::Positron,
        TileStyle::Toner,
        TileStyle::Terrain,
        TileStyle::Satellite,
        TileStyle::Osm,
        TileStyle::OsmBright,
    ];

    /// Look up the URL template for this style.
    pub fn source(self) -> TileSource {
        const fn src(base_url: &'static str, extension: &'static str, keyed: bool) -> TileSource {
            TileSource {
                base_url,
                order: IndexOrder::ColRow,
                extension,
                keyed,
            }
        }

        match self {
            Self::Watercolor => src(
                "https://watercolormaps.collection.cooperhewitt.org/tile/watercolor",
                ".jpg",
                false,
            ),
            Self::Dark => src(
                "https://tiles.stadiamaps.com/tiles/alidade_smooth_dark",
                ".png",
                true,
            ),
            Self::DarkMatter => src("https://a.basemaps.cartocdn.com/dark_all", ".png", false),
            Self::Positron => src("https://a.basemaps.cartocdn.com/light_all", ".png", false),
            Self::Toner => src("https://tiles.stadiamaps.com/tiles/stamen_toner", ".png", true),
            Self::Terrain => src(
                "https://tiles.stadiamaps.com/tiles/stamen_terrain",
                ".png",
                true,
            ),
            Self::Satellite => TileSource {
                base_url: "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile",
                order: IndexOrder::RowCol,
                extension: "",
                keyed: false,
            },
            Self::Osm => src("https://tile.openstreetmap.org", ".png", false),
            Self::OsmBright => src("https://tiles.stadiamaps.com/tiles/osm_bright", ".png", true),
        }
    }
}

/// Formats tile URLs for one style, carrying optional provider credentials.
///
/// Built once by the host application before rendering; nothing is read from the environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileUrlResolver {
    style: TileStyle,
    access_token: Option<String>,
}

impl TileUrlResolver {
    /// Create a resolver for `style` with an optional provider access token.
    pub fn new(style: TileStyle, access_token: Option<String>) -> Self {
        Self {
            style,
            access_token,
        }
    }

    /// Style served by this resolver.
    pub fn style(&self) -> TileStyle {
        self.style
    }

    /// Full URL of `tile`.
    pub fn url(&self, tile: &TileRef) -> String {
        let src = self.style.source();
        let (a, b) = match src.order {
            IndexOrder::ColRow => (tile.column, tile.row),
            IndexOrder::RowCol => (tile.row, tile.column),
        };
        let mut url = format!("{}/{}/{a}/{b}{}", src.base_url, tile.zoom, src.extension);
        if src.keyed
            && let Some(token) = self.access_token.as_deref()
        {
            url.push_str("?api_key=");
            url.push_str(token);
        }
        url
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tiles/style.rs"]
mod tests;
