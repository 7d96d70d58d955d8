// Composite: a whiteboard is drawn the same way as a single shape.

pub trait Shape {
    fn draw(&self, fill_color: &str) -> Vec<String>;
}

// Leafs

pub struct Square;

impl Shape for Square {
    fn draw(&self, fill_color: &str) -> Vec<String> {
        vec![format!("Drawing a Square with color {fill_color}")]
    }
}

pub struct Circle;

impl Shape for Circle {
    fn draw(&self, fill_color: &str) -> Vec<String> {
        vec![format!("Drawing a circle with color {fill_color}")]
    }
}

// Composite

#[derive(Default)]
pub struct Whiteboard {
    shapes: Vec<Box<dyn Shape>>,
}

impl Whiteboard {
    pub fn new(shapes: Vec<Box<dyn Shape>>) -> Self {
        Self { shapes }
    }

    pub fn add(&mut self, shape: Box<dyn Shape>) {
        self.shapes.push(shape);
    }
}

impl Shape for Whiteboard {
    fn draw(&self, fill_color: &str) -> Vec<String> {
        self.shapes
            .iter()
            .flat_map(|shape| shape.draw(fill_color))
            .collect()
    }
}
