use slotmap::new_key_type;

new_key_type! {
    /// Identifies a chess piece. Stable across moves; invalidated when the
    /// piece is captured or removed.
    pub struct PieceId;

    /// Identifies a visitor in the spectator layer.
    pub struct VisitorId;
}
