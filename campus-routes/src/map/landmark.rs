use geo::Point;

/// A named point of interest on the campus.
#[derive(Clone, Debug)]
pub struct Landmark {
    pub name: String,
    pub code: String,
    pub description: String,
    pub position: Point<f64>,
}

impl Landmark {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
        position: impl Into<Point<f64>>,
    ) -> Self {
        Landmark {
            name: name.into(),
            code: code.into(),
            description: description.into(),
            position: position.into(),
        }
    }
}

impl Default for Landmark {
    fn default() -> Self {
        Landmark::new("", "", "", (0.0, 0.0))
    }
}
