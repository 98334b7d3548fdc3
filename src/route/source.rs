use crate::{
    foundation::error::{RailcamError, RailcamResult},
    journey::model::{Journey, Route, Stop},
    route::synth::{curved_route, straight_route},
};

/// How a segment's route is obtained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteMethod {
    /// Straight line between the stops.
    Straight,
    /// Synthetic quadratic arc.
    #[default]
    Curved,
    /// Road routing service.
    Osm,
    /// Rail tracks from an Overpass query.
    Overpass,
    /// Simplified rail routing.
    Railway,
    /// Dedicated rail routing service.
    OpenRailway,
}

impl RouteMethod {
    /// Return `true` when the method can be produced without any external service.
    pub fn is_synthetic(self) -> bool {
        matches!(self, Self::Straight | Self::Curved)
    }
}

impl std::str::FromStr for RouteMethod {
    type Err = RailcamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "curved" => Ok(Self::Curved),
            "osm" => Ok(Self::Osm),
            "overpass" => Ok(Self::Overpass),
            "railway" => Ok(Self::Railway),
            "openrailway" => Ok(Self::OpenRailway),
            other => Err(RailcamError::validation(format!(
                "unknown route method '{other}'"
            ))),
        }
    }
}

/// Produces the route of one segment before rendering starts.
pub trait RouteSource {
    /// Fetch the path from `from` to `to` using `method`.
    fn fetch_segment(&self, from: &Stop, to: &Stop, method: RouteMethod) -> RailcamResult<Route>;
}

/// Offline route source generating straight and curved routes.
#[derive(Clone, Copy, Debug, Default)]
pub struct SyntheticRouteSource;

impl RouteSource for SyntheticRouteSource {
    fn fetch_segment(&self, from: &Stop, to: &Stop, method: RouteMethod) -> RailcamResult<Route> {
        match method {
            RouteMethod::Straight => Ok(Route::new(straight_route(from.point, to.point))),
            RouteMethod::Curved => Ok(Route::new(curved_route(from.point, to.point))),
            other => Err(RailcamError::route(format!(
                "{other:?} routing between '{}' and '{}' needs a network route source",
                from.label, to.label
            ))),
        }
    }
}

/// Fill every segment without a route by asking `source`, once, before any frame is computed.
///
/// A failed fetch never reaches the renderer: it is logged and replaced by the curved synthetic
/// route. Segments that already carry a route are kept.
#[tracing::instrument(skip(journey, source), fields(segments = journey.num_segments()))]
pub fn resolve_routes(
    journey: &Journey,
    source: &dyn RouteSource,
    method: RouteMethod,
) -> RailcamResult<Journey> {
    journey.validate()?;
    let mut out = journey.clone();
    out.segments = (0..journey.num_segments())
        .map(|i| {
            if let Some(route) = journey.route_for(i) {
                return Some(route.clone());
            }
            let (from, to) = (&journey.stops[i], &journey.stops[i + 1]);
            let route = match source.fetch_segment(from, to, method) {
                Ok(route) if !route.is_empty() && route.points().iter().all(|p| p.is_finite()) => {
                    route
                }
                Ok(_) => {
                    tracing::warn!(
                        segment = i,
                        "route source returned an unusable route, using curve"
                    );
                    Route::new(curved_route(from.point, to.point))
                }
                Err(err) => {
                    tracing::warn!(segment = i, error = %err, "route fetch failed, using curve");
                    Route::new(curved_route(from.point, to.point))
                }
            };
            Some(route)
        })
        .collect();
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/route/source.rs"]
mod tests;
