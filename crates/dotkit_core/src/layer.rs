//! Layer model
//!
//! Widgets render into a small tree of layers: filled circles, composed with
//! stacks, 2D transforms, and opacity. Hosts either walk the tree themselves
//! or flatten it with [`Layer::paint_list`].

// ─────────────────────────────────────────────────────────────────────────────
// Core Geometry Types
// ─────────────────────────────────────────────────────────────────────────────

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert to a Rect at the origin (0, 0)
    pub const fn to_rect(self) -> Rect {
        Rect {
            origin: Point::ZERO,
            size: self,
        }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Square bounding box of a circle
    pub fn around_circle(center: Point, radius: f32) -> Self {
        Self::new(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.size.height
    }
}

/// 2D affine transformation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2D {
    /// Matrix elements [a, b, c, d, tx, ty]
    /// | a  c  tx |
    /// | b  d  ty |
    /// | 0  0   1 |
    pub elements: [f32; 6],
}

impl Default for Affine2D {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine2D {
    pub const IDENTITY: Affine2D = Affine2D {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translation(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self {
            elements: [sx, 0.0, 0.0, sy, 0.0, 0.0],
        }
    }

    /// Uniform scale about `pivot`, followed by a translation of `(dx, dy)`
    pub fn scale_about(pivot: Point, scale: f32, dx: f32, dy: f32) -> Self {
        Affine2D::translation(pivot.x + dx, pivot.y + dy)
            .then(&Affine2D::scale(scale, scale))
            .then(&Affine2D::translation(-pivot.x, -pivot.y))
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(a * point.x + c * point.y + tx, b * point.x + d * point.y + ty)
    }

    /// Area scale factor of the linear part
    pub fn determinant(&self) -> f32 {
        let [a, b, c, d, _, _] = self.elements;
        a * d - b * c
    }

    /// Concatenate this transform with another (self * other)
    /// The resulting transform first applies `other`, then `self`.
    pub fn then(&self, other: &Affine2D) -> Affine2D {
        let [a1, b1, c1, d1, tx1, ty1] = self.elements;
        let [a2, b2, c2, d2, tx2, ty2] = other.elements;

        Affine2D {
            elements: [
                a1 * a2 + c1 * b2,
                b1 * a2 + d1 * b2,
                a1 * c2 + c1 * d2,
                b1 * c2 + d1 * d2,
                a1 * tx2 + c1 * ty2 + tx1,
                b1 * tx2 + d1 * ty2 + ty1,
            ],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Color
// ─────────────────────────────────────────────────────────────────────────────

/// RGBA color (linear space)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Color from a `0xRRGGBBAA` value
    pub fn from_hex_rgba(hex: u32) -> Self {
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::from_hex(hex >> 8).with_alpha(a)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layer Properties
// ─────────────────────────────────────────────────────────────────────────────

/// Properties common to all layers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerProperties {
    /// Visibility (skips render entirely when false)
    pub visible: bool,

    /// Optional name for debugging
    pub name: Option<String>,
}

impl LayerProperties {
    pub fn new() -> Self {
        Self {
            visible: true,
            ..Default::default()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Layer Enum
// ─────────────────────────────────────────────────────────────────────────────

/// A node in a rendered widget tree
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Filled circle
    Circle {
        center: Point,
        radius: f32,
        color: Color,
        props: LayerProperties,
    },

    /// Stack of layers composited in order
    Stack {
        layers: Vec<Layer>,
        props: LayerProperties,
    },

    /// 2D transform applied to a layer
    Transform2D {
        transform: Affine2D,
        layer: Box<Layer>,
        props: LayerProperties,
    },

    /// Opacity applied to a layer
    Opacity {
        value: f32,
        layer: Box<Layer>,
        props: LayerProperties,
    },

    /// Empty layer (renders nothing)
    Empty { props: LayerProperties },
}

/// A circle with its transforms and opacity resolved, ready to paint
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintedCircle {
    pub center: Point,
    pub radius: f32,
    /// Fill color with accumulated opacity folded into alpha
    pub color: Color,
}

impl PaintedCircle {
    pub fn bounds(&self) -> Rect {
        Rect::around_circle(self.center, self.radius)
    }
}

impl Layer {
    /// Get the layer properties
    pub fn props(&self) -> &LayerProperties {
        match self {
            Layer::Circle { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform2D { props, .. } => props,
            Layer::Opacity { props, .. } => props,
            Layer::Empty { props } => props,
        }
    }

    /// Get mutable layer properties
    pub fn props_mut(&mut self) -> &mut LayerProperties {
        match self {
            Layer::Circle { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform2D { props, .. } => props,
            Layer::Opacity { props, .. } => props,
            Layer::Empty { props } => props,
        }
    }

    /// Debug name, if any
    pub fn name(&self) -> Option<&str> {
        self.props().name.as_deref()
    }

    /// Check if the layer is visible
    pub fn is_visible(&self) -> bool {
        self.props().visible
    }

    /// Create an empty layer
    pub fn empty() -> Self {
        Layer::Empty {
            props: LayerProperties::new(),
        }
    }

    /// Create a filled circle
    pub fn circle(center: Point, radius: f32, color: Color) -> Self {
        Layer::Circle {
            center,
            radius,
            color,
            props: LayerProperties::new(),
        }
    }

    /// Create a stack of layers
    pub fn stack(layers: Vec<Layer>) -> Self {
        Layer::Stack {
            layers,
            props: LayerProperties::new(),
        }
    }

    /// Set the debug name
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.props_mut().name = Some(name.into());
        self
    }

    /// Wrap this layer with a 2D transform
    pub fn with_transform_2d(self, transform: Affine2D) -> Self {
        Layer::Transform2D {
            transform,
            layer: Box::new(self),
            props: LayerProperties::new(),
        }
    }

    /// Wrap this layer with an opacity
    pub fn with_opacity(self, value: f32) -> Self {
        Layer::Opacity {
            value,
            layer: Box::new(self),
            props: LayerProperties::new(),
        }
    }

    /// Visit direct children
    pub fn visit_children<F: FnMut(&Layer)>(&self, mut f: F) {
        match self {
            Layer::Stack { layers, .. } => {
                for layer in layers {
                    f(layer);
                }
            }
            Layer::Transform2D { layer, .. } | Layer::Opacity { layer, .. } => f(layer),
            Layer::Circle { .. } | Layer::Empty { .. } => {}
        }
    }

    /// Traverse this layer and all descendants in depth-first order
    pub fn traverse<F: FnMut(&Layer, usize)>(&self, mut f: F) {
        fn traverse_layer<F: FnMut(&Layer, usize)>(layer: &Layer, depth: usize, f: &mut F) {
            f(layer, depth);
            layer.visit_children(|child| traverse_layer(child, depth + 1, f));
        }

        traverse_layer(self, 0, &mut f);
    }

    /// Count this layer and all descendants
    pub fn layer_count(&self) -> usize {
        let mut count = 0;
        self.traverse(|_, _| count += 1);
        count
    }

    /// Flatten visible circles into paint order with transforms and
    /// opacity applied
    pub fn paint_list(&self) -> Vec<PaintedCircle> {
        fn collect(
            layer: &Layer,
            transform: Affine2D,
            opacity: f32,
            out: &mut Vec<PaintedCircle>,
        ) {
            if !layer.is_visible() {
                return;
            }
            match layer {
                Layer::Circle {
                    center,
                    radius,
                    color,
                    ..
                } => out.push(PaintedCircle {
                    center: transform.transform_point(*center),
                    radius: radius * transform.determinant().abs().sqrt(),
                    color: color.with_alpha(color.a * opacity),
                }),
                Layer::Stack { layers, .. } => {
                    for child in layers {
                        collect(child, transform, opacity, out);
                    }
                }
                Layer::Transform2D {
                    transform: local,
                    layer: child,
                    ..
                } => collect(child, transform.then(local), opacity, out),
                Layer::Opacity {
                    value,
                    layer: child,
                    ..
                } => collect(child, transform, opacity * value, out),
                Layer::Empty { .. } => {}
            }
        }

        let mut out = Vec::new();
        collect(self, Affine2D::IDENTITY, 1.0, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_creation() {
        let layer = Layer::empty();
        assert!(layer.is_visible());
        assert!(layer.name().is_none());
        assert!(layer.paint_list().is_empty());
    }

    #[test]
    fn test_layer_stack() {
        let stack = Layer::stack(vec![Layer::empty(), Layer::empty(), Layer::empty()]);

        let mut count = 0;
        stack.visit_children(|_| count += 1);
        assert_eq!(count, 3);
        assert_eq!(stack.layer_count(), 4);
    }

    #[test]
    fn test_layer_transforms() {
        let layer = Layer::empty()
            .with_transform_2d(Affine2D::translation(10.0, 20.0))
            .with_opacity(0.5);

        assert!(matches!(layer, Layer::Opacity { .. }));
    }

    #[test]
    fn test_scale_about_keeps_pivot() {
        let pivot = Point::new(5.0, 5.0);
        let t = Affine2D::scale_about(pivot, 2.0, 0.0, 0.0);
        assert_eq!(t.transform_point(pivot), pivot);
        assert_eq!(t.transform_point(Point::new(6.0, 5.0)), Point::new(7.0, 5.0));
        assert_eq!(t.determinant(), 4.0);
    }

    #[test]
    fn test_paint_list_applies_transform_and_opacity() {
        let tree = Layer::stack(vec![
            Layer::circle(Point::new(5.0, 5.0), 5.0, Color::WHITE)
                .with_transform_2d(Affine2D::scale_about(Point::new(5.0, 5.0), 1.5, 0.0, -10.0))
                .with_opacity(0.3),
            Layer::circle(Point::new(20.0, 5.0), 5.0, Color::WHITE).named("second"),
        ]);

        let painted = tree.paint_list();
        assert_eq!(painted.len(), 2);

        assert_eq!(painted[0].center, Point::new(5.0, -5.0));
        assert!((painted[0].radius - 7.5).abs() < 1e-5);
        assert!((painted[0].color.a - 0.3).abs() < 1e-6);

        assert_eq!(painted[1].center, Point::new(20.0, 5.0));
        assert_eq!(painted[1].color.a, 1.0);
        assert_eq!(painted[1].bounds(), Rect::new(15.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_hidden_layers_are_not_painted() {
        let mut circle = Layer::circle(Point::ZERO, 1.0, Color::BLACK);
        circle.props_mut().visible = false;
        assert!(Layer::stack(vec![circle]).paint_list().is_empty());
    }

    #[test]
    fn test_geometry_types() {
        let r = Rect::new(1.0, 2.0, 100.0, 50.0);
        assert_eq!(r.center(), Point::new(51.0, 27.0));
        assert!(r.contains(Point::new(50.0, 25.0)));
        assert!(!r.contains(Point::new(200.0, 100.0)));

        let rect = Size::new(200.0, 100.0).to_rect();
        assert_eq!(rect.origin, Point::ZERO);
        assert_eq!(rect.width(), 200.0);
        assert_eq!(rect.height(), 100.0);
    }

    #[test]
    fn test_color() {
        let c = Color::from_hex(0xFF5500);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 85.0 / 255.0).abs() < 0.001);
        assert_eq!(c.b, 0.0);

        let c2 = c.with_alpha(0.5);
        assert_eq!(c2.a, 0.5);

        let c3 = Color::from_hex_rgba(0xFF550080);
        assert_eq!(c3.r, 1.0);
        assert!((c3.a - 128.0 / 255.0).abs() < 0.001);
    }
}
