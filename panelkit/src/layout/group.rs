//! Groups and the layout arena.

use super::LayoutItem;
use super::axis::{Align, CrossAlign, Direction};
use super::decoration::DecorationCache;
use crate::primitives::{Insets, Point, Size};
use crate::surface::Surface;

/// Smallest content extent kept visible inside a decoration.
const MIN_DECORATED_CONTENT: i32 = 10;

// =========================================================================
// Identifiers
// =========================================================================

/// Index of a group in its [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(usize);

/// Index of a leaf item in its [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

/// A child slot: either a leaf item or a nested group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Node {
    Item(ItemId),
    Group(GroupId),
}

impl From<ItemId> for Node {
    fn from(id: ItemId) -> Self {
        Node::Item(id)
    }
}

impl From<GroupId> for Node {
    fn from(id: GroupId) -> Self {
        Node::Group(id)
    }
}

// =========================================================================
// Group
// =========================================================================

/// How one child sits inside its group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub node: Node,
    pub align: Align,
    /// Name of the decoration framing the child, resolved via [`DecorationCache`].
    pub decoration: Option<String>,
    pub margins: Insets,
}

/// A layout node arranging children along one axis.
#[derive(Debug, Clone)]
pub struct Group {
    direction: Direction,
    min_size: Size,
    position: Point,
    children: Vec<Placement>,
    /// Owning group; `None` for the root of a tree.
    parent: Option<GroupId>,
}

impl Group {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Requested minimum; the actual size may be larger.
    pub fn min_size(&self) -> Size {
        self.min_size
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn children(&self) -> &[Placement] {
        &self.children
    }

    pub fn parent(&self) -> Option<GroupId> {
        self.parent
    }
}

// =========================================================================
// Layout
// =========================================================================

/// Arena of groups and leaf items.
///
/// Decoration insets participate in sizing, so the layout borrows the
/// application's [`DecorationCache`] for its whole lifetime.
pub struct Layout<'d, T> {
    decorations: &'d DecorationCache,
    groups: Vec<Group>,
    items: Vec<T>,
}

impl<'d, T: LayoutItem> Layout<'d, T> {
    pub fn new(decorations: &'d DecorationCache) -> Self {
        Self {
            decorations,
            groups: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn decorations(&self) -> &'d DecorationCache {
        self.decorations
    }

    /// Create a detached group. It is a root until placed into another group.
    pub fn add_group(&mut self, direction: Direction, min_size: Size) -> GroupId {
        self.groups.push(Group {
            direction,
            min_size,
            position: Point::ORIGIN,
            children: Vec::new(),
            parent: None,
        });
        GroupId(self.groups.len() - 1)
    }

    /// Take ownership of a leaf item.
    pub fn add_item(&mut self, item: T) -> ItemId {
        self.items.push(item);
        ItemId(self.items.len() - 1)
    }

    pub fn group(&self, id: GroupId) -> &Group {
        &self.groups[id.0]
    }

    pub fn item(&self, id: ItemId) -> &T {
        &self.items[id.0]
    }

    /// Mutable access to an item. Call [`Layout::update_geometry`] afterwards
    /// if its size changed.
    pub fn item_mut(&mut self, id: ItemId) -> &mut T {
        &mut self.items[id.0]
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &T)> {
        self.items.iter().enumerate().map(|(index, item)| (ItemId(index), item))
    }

    /// Append `node` to `group` and re-lay-out the whole tree.
    ///
    /// A group that already has a parent, or that would contain itself, is
    /// not placed; the call is logged and ignored.
    pub fn place(
        &mut self,
        group: GroupId,
        node: impl Into<Node>,
        align: Align,
        decoration: Option<&str>,
        margins: Insets,
    ) {
        let node = node.into();
        if let Node::Group(child) = node {
            if let Some(parent) = self.groups[child.0].parent {
                tracing::warn!(?child, ?parent, "group already placed, ignoring");
                return;
            }
            if self.root_of(group) == child {
                tracing::warn!(?child, ?group, "group placed inside itself, ignoring");
                return;
            }
            self.groups[child.0].parent = Some(group);
        }
        self.groups[group.0].children.push(Placement {
            node,
            align,
            decoration: decoration.map(str::to_string),
            margins,
        });
        self.update_geometry(group);
    }

    /// Change a group's requested minimum size and re-lay-out its tree.
    pub fn set_min_size(&mut self, group: GroupId, min_size: Size) {
        self.groups[group.0].min_size = min_size;
        self.update_geometry(group);
    }

    /// The group at the top of `group`'s tree.
    pub fn root_of(&self, group: GroupId) -> GroupId {
        let mut current = group;
        while let Some(parent) = self.groups[current.0].parent {
            current = parent;
        }
        current
    }

    /// Re-lay-out the tree containing `group`, keeping the root where it is.
    pub fn update_geometry(&mut self, group: GroupId) {
        let root = self.root_of(group);
        let position = self.groups[root.0].position;
        self.set_position(root, position);
    }

    /// Smallest size that fits every child with its margins and decoration.
    pub fn min_size(&self, group: GroupId) -> Size {
        let group = &self.groups[group.0];
        let mut total = Size::ZERO;
        for placement in &group.children {
            let item = self.node_size(placement.node);
            let insets = self.insets_of(placement);
            let pad = placement.margins + insets;

            let mut width = item.width + pad.horizontal();
            let mut height = item.height + pad.vertical();
            if placement.decoration.is_some() {
                width = width.max(insets.horizontal() + MIN_DECORATED_CONTENT);
                height = height.max(insets.vertical() + MIN_DECORATED_CONTENT);
            }

            match group.direction {
                Direction::Vertical => {
                    total.width = total.width.max(width);
                    total.height += height;
                }
                Direction::Horizontal => {
                    total.width += width;
                    total.height = total.height.max(height);
                }
            }
        }
        total
    }

    /// Actual size: the content size grown to the requested minimum.
    pub fn size(&self, group: GroupId) -> Size {
        self.min_size(group).max(self.groups[group.0].min_size)
    }

    pub fn node_size(&self, node: Node) -> Size {
        match node {
            Node::Item(id) => self.items[id.0].size(),
            Node::Group(id) => self.size(id),
        }
    }

    pub fn node_position(&self, node: Node) -> Point {
        match node {
            Node::Item(id) => self.items[id.0].position(),
            Node::Group(id) => self.groups[id.0].position,
        }
    }

    fn set_node_position(&mut self, node: Node, position: Point) {
        match node {
            Node::Item(id) => self.items[id.0].set_position(position),
            Node::Group(id) => self.set_position(id, position),
        }
    }

    fn insets_of(&self, placement: &Placement) -> Insets {
        placement
            .decoration
            .as_deref()
            .map_or(Insets::ZERO, |name| self.decorations.insets(name))
    }

    /// Move `group` to `position` and reposition its subtree.
    ///
    /// Children receive absolute coordinates; a centred child that cannot
    /// sit exactly in the middle is rounded toward the near edge.
    pub fn set_position(&mut self, group: GroupId, position: Point) {
        self.groups[group.0].position = position;
        let extent = self.size(group);
        let direction = self.groups[group.0].direction;
        let children: Vec<(Node, CrossAlign, Insets)> = self.groups[group.0]
            .children
            .iter()
            .map(|placement| {
                (
                    placement.node,
                    placement.align.cross(),
                    placement.margins + self.insets_of(placement),
                )
            })
            .collect();

        let mut cursor = 0;
        for (node, align, pad) in children {
            let item = self.node_size(node);
            let (x, y) = match direction {
                Direction::Vertical => {
                    let x = cross_offset(align, extent.width, item.width, pad.left, pad.right);
                    let y = cursor + pad.top;
                    cursor += item.height + pad.vertical();
                    (x, y)
                }
                Direction::Horizontal => {
                    let x = cursor + pad.left;
                    let y = cross_offset(align, extent.height, item.height, pad.top, pad.bottom);
                    cursor += item.width + pad.horizontal();
                    (x, y)
                }
            };
            self.set_node_position(node, Point::new(position.x + x, position.y + y));
        }
    }

    /// Leaf items reachable from `group`, in placement order.
    pub fn items_in(&self, group: GroupId) -> Vec<ItemId> {
        let mut found = Vec::new();
        self.collect_items(group, &mut found);
        found
    }

    fn collect_items(&self, group: GroupId, found: &mut Vec<ItemId>) {
        for placement in &self.groups[group.0].children {
            match placement.node {
                Node::Item(id) => found.push(id),
                Node::Group(id) => self.collect_items(id, found),
            }
        }
    }

    // =====================================================================
    // Rendering
    // =====================================================================

    /// Paint the background and every decoration of the tree under `root`.
    pub fn draw_all_decorations(&self, root: GroupId) -> Surface {
        let mut surface = Surface::filled(self.size(root), self.decorations.background());
        self.draw_decorations(root, &mut surface);
        surface
    }

    fn draw_decorations(&self, group: GroupId, surface: &mut Surface) {
        for placement in &self.groups[group.0].children {
            if let Some(name) = placement.decoration.as_deref() {
                let item = self.node_size(placement.node);
                let at = self.node_position(placement.node);
                let pad = placement.margins + self.decorations.insets(name);
                let frame = self.decorations.tile(
                    name,
                    Size::new(item.width + pad.horizontal(), item.height + pad.vertical()),
                );
                surface.blit(&frame.into_image(), Point::new(at.x - pad.left, at.y - pad.top));
            }
            if let Node::Group(child) = placement.node {
                self.draw_decorations(child, surface);
            }
        }
    }

    /// Decorations plus every visible item's bitmap, composited.
    pub fn render(&self, root: GroupId) -> Surface {
        let mut surface = self.draw_all_decorations(root);
        for id in self.items_in(root) {
            let item = &self.items[id.0];
            if let Some(image) = item.image() {
                surface.draw_image(image, item.position());
            }
        }
        surface
    }
}

fn cross_offset(align: CrossAlign, extent: i32, item: i32, near: i32, far: i32) -> i32 {
    match align {
        CrossAlign::Near => near,
        CrossAlign::Far => extent - item - far,
        CrossAlign::Center => (extent - item).div_euclid(2),
    }
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Spacer;
    use crate::primitives::Color;
    use crate::surface::ImageHandle;
    use crate::theme::Theme;
    use image::RgbaImage;

    fn cache() -> DecorationCache {
        DecorationCache::new(Theme::default())
    }

    fn spacer_y(layout: &Layout<'_, Spacer>, id: ItemId) -> i32 {
        layout.item(id).position().y
    }

    #[test]
    fn test_vertical_children_stack() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::ZERO);
        let ids: Vec<ItemId> = [10, 20, 30]
            .into_iter()
            .map(|h| layout.add_item(Spacer::new(8, h)))
            .collect();
        for &id in &ids {
            layout.place(root, id, Align::Left, None, Insets::ZERO);
        }

        layout.set_position(root, Point::ORIGIN);
        let ys: Vec<i32> = ids.iter().map(|&id| spacer_y(&layout, id)).collect();
        assert_eq!(ys, vec![0, 10, 30]);
        assert_eq!(layout.size(root), Size::new(8, 60));
    }

    #[test]
    fn test_center_on_cross_axis() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::new(0, 100));
        let id = layout.add_item(Spacer::new(20, 40));
        layout.place(root, id, Align::Center, None, Insets::ZERO);
        assert_eq!(layout.item(id).position(), Point::new(0, 30));
    }

    #[test]
    fn test_center_floors_half_pixel() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::new(0, 101));
        let id = layout.add_item(Spacer::new(20, 40));
        layout.place(root, id, Align::Center, None, Insets::ZERO);
        assert_eq!(layout.item(id).position().y, 30);
    }

    #[test]
    fn test_near_and_far_alignment() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::new(100, 0));
        let left = layout.add_item(Spacer::new(20, 10));
        let right = layout.add_item(Spacer::new(20, 10));
        layout.place(root, left, Align::Left, None, Insets::new(4, 0, 1, 0));
        layout.place(root, right, Align::Right, None, Insets::new(0, 5, 0, 2));

        assert_eq!(layout.item(left).position(), Point::new(4, 1));
        assert_eq!(layout.item(right).position(), Point::new(75, 11));
        assert_eq!(layout.size(root), Size::new(100, 23));
    }

    #[test]
    fn test_horizontal_margins_advance_cursor() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::ZERO);
        let a = layout.add_item(Spacer::new(10, 10));
        let b = layout.add_item(Spacer::new(10, 10));
        layout.place(root, a, Align::Top, None, Insets::new(2, 3, 4, 0));
        layout.place(root, b, Align::Bottom, None, Insets::new(1, 0, 0, 6));

        assert_eq!(layout.item(a).position(), Point::new(2, 4));
        // cursor after a: 10 + 2 + 3 = 15; height = max(14, 16) = 16
        assert_eq!(layout.item(b).position(), Point::new(16, 0));
        assert_eq!(layout.size(root), Size::new(26, 16));
    }

    #[test]
    fn test_empty_group_uses_min_size() {
        let cache = cache();
        let mut layout: Layout<'_, Spacer> = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::new(10, 10));
        assert_eq!(layout.min_size(root), Size::ZERO);
        assert_eq!(layout.size(root), Size::new(10, 10));
    }

    #[test]
    fn test_size_respects_min_and_grows_with_children() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::new(30, 30));
        let id = layout.add_item(Spacer::new(10, 10));
        layout.place(root, id, Align::Center, None, Insets::ZERO);

        let mut previous = layout.size(root);
        assert!(previous.width >= 30 && previous.height >= 30);
        for grow in [20, 40, 80] {
            layout.item_mut(id).resize(Size::new(grow, grow));
            layout.update_geometry(root);
            let size = layout.size(root);
            assert!(size.width >= previous.width && size.height >= previous.height);
            assert!(size.width >= 30 && size.height >= 30);
            previous = size;
        }
        assert_eq!(previous, Size::new(80, 80));
    }

    #[test]
    fn test_decoration_insets_and_floor() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::ZERO);
        let framed = layout.add_item(Spacer::new(20, 10));
        layout.place(root, framed, Align::Left, Some("groove"), Insets::new(1, 2, 3, 4));
        // 20 + 3+3 + 1+2, 10 + 3+3 + 3+4
        assert_eq!(layout.size(root), Size::new(29, 23));
        assert_eq!(layout.item(framed).position(), Point::new(4, 6));

        let tiny = layout.add_item(Spacer::new(0, 0));
        layout.place(root, tiny, Align::Left, Some("groove"), Insets::ZERO);
        // floored at 3+3+10 on both axes
        assert_eq!(layout.size(root), Size::new(29, 23 + 16));
    }

    #[test]
    fn test_nested_groups_get_absolute_positions() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::ZERO);
        let row = layout.add_group(Direction::Horizontal, Size::ZERO);
        let header = layout.add_item(Spacer::new(40, 5));
        let a = layout.add_item(Spacer::new(10, 10));
        let b = layout.add_item(Spacer::new(10, 10));

        layout.place(root, header, Align::Left, None, Insets::ZERO);
        layout.place(row, a, Align::Top, None, Insets::ZERO);
        layout.place(root, row, Align::Left, None, Insets::new(0, 0, 2, 0));
        // placing into a group already inside the tree refreshes from the root
        layout.place(row, b, Align::Top, None, Insets::new(5, 0, 0, 0));

        assert_eq!(layout.group(row).parent(), Some(root));
        assert_eq!(layout.root_of(row), root);
        assert_eq!(layout.group(row).position(), Point::new(0, 7));
        assert_eq!(layout.item(a).position(), Point::new(0, 7));
        assert_eq!(layout.item(b).position(), Point::new(15, 7));

        layout.set_position(root, Point::new(100, 50));
        assert_eq!(layout.item(b).position(), Point::new(115, 57));
        assert_eq!(layout.items_in(root), vec![header, a, b]);
    }

    #[test]
    fn test_set_min_size_relayouts() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::ZERO);
        let id = layout.add_item(Spacer::new(10, 10));
        layout.place(root, id, Align::Center, None, Insets::ZERO);
        assert_eq!(layout.item(id).position(), Point::new(0, 0));
        layout.set_min_size(root, Size::new(10, 50));
        assert_eq!(layout.item(id).position(), Point::new(0, 20));
    }

    #[test]
    fn test_draw_all_decorations_frames_item() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::ZERO);
        let id = layout.add_item(Spacer::new(10, 10));
        layout.place(root, id, Align::Center, Some("groove"), Insets::ZERO);

        let surface = layout.draw_all_decorations(root);
        assert_eq!(surface.size(), Size::new(16, 16));
        assert_eq!(layout.item(id).position(), Point::new(3, 3));
        assert_eq!(surface.pixel(Point::new(1, 1)), Some(Color::GREY));
        assert_eq!(surface.pixel(Point::new(14, 14)), Some(Color::GREY));
        assert_eq!(surface.pixel(Point::new(8, 8)), Some(Theme::BACKGROUND));
        assert_eq!(surface.pixel(Point::new(0, 0)), Some(Theme::BACKGROUND));
    }

    #[test]
    fn test_decoration_frame_includes_margins() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::ZERO);
        let id = layout.add_item(Spacer::new(10, 10));
        layout.place(root, id, Align::Top, Some("groove"), Insets::new(2, 5, 1, 4));

        // 10 + (2+5) + (3+3), 10 + (1+4) + (3+3)
        assert_eq!(layout.size(root), Size::new(23, 21));
        let at = layout.item(id).position();
        assert_eq!(at, Point::new(5, 4));

        // frame spans item + margins + insets, from position - margin - inset
        let surface = layout.draw_all_decorations(root);
        let origin = Point::new(at.x - 2 - 3, at.y - 1 - 3);
        assert_eq!(origin, Point::ORIGIN);
        assert_eq!(surface.pixel(Point::new(origin.x + 1, origin.y + 1)), Some(Color::GREY));
        assert_eq!(surface.pixel(Point::new(21, 19)), Some(Color::GREY));
        assert_eq!(surface.pixel(Point::new(11, 1)), Some(Color::GREY));
        // where an insets-only frame would put its outline
        assert_eq!(surface.pixel(Point::new(3, 2)), Some(Theme::BACKGROUND));
        assert_eq!(surface.pixel(Point::new(16, 15)), Some(Theme::BACKGROUND));
    }

    #[test]
    fn test_cyclic_and_repeated_group_placement_ignored() {
        let cache = cache();
        let mut layout: Layout<'_, Spacer> = Layout::new(&cache);
        let root = layout.add_group(Direction::Vertical, Size::ZERO);
        let row = layout.add_group(Direction::Horizontal, Size::ZERO);
        let other = layout.add_group(Direction::Horizontal, Size::ZERO);
        layout.place(root, row, Align::Left, None, Insets::ZERO);

        layout.place(row, root, Align::Left, None, Insets::ZERO);
        layout.place(row, row, Align::Left, None, Insets::ZERO);
        layout.place(other, row, Align::Left, None, Insets::ZERO);

        assert_eq!(layout.group(root).parent(), None);
        assert_eq!(layout.group(row).parent(), Some(root));
        assert!(layout.group(row).children().is_empty());
        assert!(layout.group(other).children().is_empty());
        assert_eq!(layout.root_of(row), root);
    }

    #[test]
    fn test_large_coordinates_stay_exact() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::new(0, 101));
        let centred = layout.add_item(Spacer::new(20, 40));
        let far = layout.add_item(Spacer::new(20, 40));
        layout.place(root, centred, Align::Center, None, Insets::ZERO);
        layout.place(root, far, Align::Bottom, None, Insets::new(1, 0, 0, 3));

        let origin = Point::new((1 << 24) + 1, (1 << 24) + 3);
        layout.set_position(root, origin);
        assert_eq!(layout.item(centred).position(), Point::new(origin.x, origin.y + 30));
        assert_eq!(layout.item(far).position(), Point::new(origin.x + 21, origin.y + 58));
    }

    struct Sprite {
        image: ImageHandle,
        position: Point,
    }

    impl LayoutItem for Sprite {
        fn size(&self) -> Size {
            self.image.size()
        }

        fn position(&self) -> Point {
            self.position
        }

        fn set_position(&mut self, position: Point) {
            self.position = position;
        }

        fn image(&self) -> Option<&ImageHandle> {
            Some(&self.image)
        }
    }

    #[test]
    fn test_render_paints_items() {
        let cache = cache();
        let mut layout = Layout::new(&cache);
        let root = layout.add_group(Direction::Horizontal, Size::new(20, 20));
        let red = ImageHandle::from_rgba(RgbaImage::from_pixel(4, 4, Color::rgb(255, 0, 0).to_rgba()));
        let id = layout.add_item(Sprite {
            image: red,
            position: Point::ORIGIN,
        });
        layout.place(root, id, Align::Center, None, Insets::new(6, 0, 0, 0));

        let surface = layout.render(root);
        assert_eq!(layout.item(id).position(), Point::new(6, 8));
        assert_eq!(surface.pixel(Point::new(7, 9)), Some(Color::rgb(255, 0, 0)));
        assert_eq!(surface.pixel(Point::new(2, 2)), Some(Theme::BACKGROUND));
    }
}
