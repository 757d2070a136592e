use crate::{CanvasHandle, Command, Drawing};

/// An ordered batch of commands for one canvas.
///
/// A batch is the unit a [`crate::CanvasTransport`] delivers. Commands inside
/// it must execute in order with nothing else interleaved, which is what keeps
/// compound operations (gradient assignment, framed paths) intact.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CanvasUpdate {
    pub target: CanvasHandle,
    pub commands: Vec<Command>,
}

impl CanvasUpdate {
    #[must_use]
    pub const fn new(target: CanvasHandle) -> Self {
        Self {
            target,
            commands: Vec::new(),
        }
    }

    /// Builds the batch replaying `drawing` against `target`.
    #[must_use]
    pub fn from_drawing(target: CanvasHandle, drawing: &Drawing) -> Self {
        let commands = drawing.commands(&target);
        Self { target, commands }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Extend<Command> for CanvasUpdate {
    fn extend<T: IntoIterator<Item = Command>>(&mut self, iter: T) {
        self.commands.extend(iter);
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Point, command, drawing};

    #[test_log::test]
    fn from_drawing_targets_the_given_canvas() {
        let target = CanvasHandle::new("board");
        let update = CanvasUpdate::from_drawing(target.clone(), &drawing::clear());

        assert_eq!(update.target, target);
        assert_eq!(update.commands, vec![command::clear_canvas(&target)]);
    }

    #[test_log::test]
    fn push_and_extend_keep_order() {
        let target = CanvasHandle::new("board");
        let mut update = CanvasUpdate::new(target.clone());

        update.push(command::begin_path(&target));
        update.extend([
            command::move_to(&target, Point(0.0, 0.0)),
            command::stroke(&target),
        ]);

        assert_eq!(update.len(), 3);
        assert_eq!(
            update
                .commands
                .iter()
                .map(Command::name)
                .collect::<Vec<_>>(),
            vec!["beginPath", "moveTo", "stroke"]
        );
    }

    #[cfg(feature = "serde")]
    #[test_log::test]
    fn serializes_with_camel_case_fields() {
        let target = CanvasHandle::new("board");
        let mut update = CanvasUpdate::new(target.clone());
        update.push(command::set_line_width(&target, 2.0));

        let value = serde_json::to_value(&update).unwrap();

        assert_eq!(value["target"], "board");
        assert_eq!(value["commands"][0]["name"], "lineWidth");
        assert_eq!(value["commands"][0]["args"][0]["canvas"], "board");
        assert_eq!(value["commands"][0]["args"][1]["number"], 2.0);

        let round_tripped: CanvasUpdate = serde_json::from_value(value).unwrap();
        assert_eq!(round_tripped, update);
    }
}
