//! Walks the fixed scene hierarchy and flattens it into a draw list.
//!
//! Hierarchy (parent → child):
//!
//! ```text
//! universe
//! earth (18, 0, -30)
//! sun   (0, 0, -30)
//! figure: T(0, 3, -4) · S(0.6) · T(15, 0, 0)
//! └── body (0, 1.5, 0)
//!     ├── head (0, 0.6, 0)
//!     ├── shoulder (±0.8, -0.1, 0) · swing
//!     │   └── arm (0, -0.1, 0)
//!     └── hip (±0.3, -1.9, 0) · swing
//!         └── leg
//! ```
//!
//! Cylinders are centered on their local origin, so limbs and the torso are
//! shifted down by half their height to hang from the joint above them.

use glam::{Mat4, Vec3};

use super::{ObjectId, SceneObjects, TransformStack};
use crate::animation::Pose;

/// One object instance with its world transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    /// Which registry entry to draw.
    pub object: ObjectId,
    /// Object → world matrix.
    pub model: Mat4,
}

/// Draw items in traversal order.
pub type DrawList = Vec<DrawItem>;

const EARTH_POSITION: Vec3 = Vec3::new(18.0, 0.0, -30.0);
const SUN_POSITION: Vec3 = Vec3::new(0.0, 0.0, -30.0);
const FIGURE_POSITION: Vec3 = Vec3::new(0.0, 3.0, -4.0);
const FIGURE_SCALE: f32 = 0.6;
const FIGURE_OFFSET: Vec3 = Vec3::new(15.0, 0.0, 0.0);
const BODY_JOINT: Vec3 = Vec3::new(0.0, 1.5, 0.0);
const NECK_JOINT: Vec3 = Vec3::new(0.0, 0.6, 0.0);
const SHOULDER_JOINT: Vec3 = Vec3::new(0.8, -0.1, 0.0);
const ARM_JOINT: Vec3 = Vec3::new(0.0, -0.1, 0.0);
const HIP_JOINT: Vec3 = Vec3::new(0.3, -1.9, 0.0);

fn translate(v: Vec3) -> Mat4 {
    Mat4::from_translation(v)
}

fn mirror_x(v: Vec3) -> Vec3 {
    Vec3::new(-v.x, v.y, v.z)
}

/// Compose the scene for `pose` on a fresh stack.
#[must_use]
pub fn compose(objects: &SceneObjects, pose: &Pose) -> DrawList {
    let mut stack = TransformStack::new();
    compose_with(&mut stack, objects, pose)
}

/// Compose the scene for `pose` on the given stack, leaving it at the frame
/// it started in.
pub fn compose_with(
    stack: &mut TransformStack,
    objects: &SceneObjects,
    pose: &Pose,
) -> DrawList {
    let mut list = DrawList::with_capacity(11);
    let mut draw = |model: Mat4, object: ObjectId| {
        list.push(DrawItem { object, model });
    };
    let hang = |id: ObjectId| translate(Vec3::new(0.0, -objects.height(id) * 0.5, 0.0));

    draw(stack.current(), ObjectId::Universe);

    stack.with_local(
        translate(EARTH_POSITION) * Mat4::from_rotation_y(pose.earth_spin),
        |s| draw(s.current(), ObjectId::Earth),
    );
    stack.with_local(
        translate(SUN_POSITION) * Mat4::from_rotation_y(pose.sun_spin),
        |s| draw(s.current(), ObjectId::Sun),
    );

    let figure = translate(FIGURE_POSITION)
        * Mat4::from_scale(Vec3::splat(FIGURE_SCALE))
        * translate(FIGURE_OFFSET);
    stack.with_local(figure, |s| {
        s.with_local(translate(BODY_JOINT), |s| {
            s.with_local(hang(ObjectId::Body), |s| draw(s.current(), ObjectId::Body));
            s.with_local(translate(NECK_JOINT), |s| draw(s.current(), ObjectId::Head));

            let limbs = [
                (SHOULDER_JOINT, pose.right_arm),
                (mirror_x(SHOULDER_JOINT), pose.left_arm),
            ];
            for (joint, swing) in limbs {
                let shoulder = translate(joint) * Mat4::from_rotation_x(swing);
                s.with_local(shoulder, |s| {
                    draw(s.current(), ObjectId::Shoulder);
                    s.with_local(translate(ARM_JOINT) * hang(ObjectId::Arm), |s| {
                        draw(s.current(), ObjectId::Arm);
                    });
                });
            }

            let legs = [
                (HIP_JOINT, pose.right_leg),
                (mirror_x(HIP_JOINT), pose.left_leg),
            ];
            for (joint, swing) in legs {
                let hip = translate(joint) * Mat4::from_rotation_x(swing);
                s.with_local(hip * hang(ObjectId::Leg), |s| draw(s.current(), ObjectId::Leg));
            }
        });
    });

    list
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_origin(item: &DrawItem) -> Vec3 {
        item.model.transform_point3(Vec3::ZERO)
    }

    fn items(list: &DrawList, id: ObjectId) -> Vec<DrawItem> {
        list.iter().copied().filter(|i| i.object == id).collect()
    }

    #[test]
    fn every_part_is_drawn_once_per_instance() {
        let objects = SceneObjects::standard().unwrap();
        let list = compose(&objects, &Pose::REST);
        assert_eq!(list.len(), 11);
        assert_eq!(items(&list, ObjectId::Shoulder).len(), 2);
        assert_eq!(items(&list, ObjectId::Arm).len(), 2);
        assert_eq!(items(&list, ObjectId::Leg).len(), 2);
        assert_eq!(list[0].object, ObjectId::Universe);
        assert_eq!(list[0].model, Mat4::IDENTITY);
    }

    #[test]
    fn stack_is_balanced_after_compose() {
        let objects = SceneObjects::standard().unwrap();
        let mut stack = TransformStack::new();
        let _ = compose_with(&mut stack, &objects, &Pose::at(123, 600));
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.enters(), stack.exits());
        assert_eq!(stack.current(), Mat4::IDENTITY);
    }

    #[test]
    fn rest_pose_positions() {
        let objects = SceneObjects::standard().unwrap();
        let list = compose(&objects, &Pose::REST);

        let earth = items(&list, ObjectId::Earth)[0];
        assert!(world_origin(&earth).abs_diff_eq(EARTH_POSITION, 1e-5));
        let sun = items(&list, ObjectId::Sun)[0];
        assert!(world_origin(&sun).abs_diff_eq(SUN_POSITION, 1e-5));

        // (15, 2.1, 0) scaled by 0.6 then moved by (0, 3, -4).
        let head = items(&list, ObjectId::Head)[0];
        assert!(world_origin(&head).abs_diff_eq(Vec3::new(9.0, 4.26, -4.0), 1e-4));
    }

    #[test]
    fn cylinders_hang_from_their_joint() {
        let objects = SceneObjects::standard().unwrap();
        let list = compose(&objects, &Pose::REST);
        let figure = Mat4::from_translation(FIGURE_POSITION)
            * Mat4::from_scale(Vec3::splat(FIGURE_SCALE))
            * Mat4::from_translation(FIGURE_OFFSET);

        // Top of the torso sits on the body joint.
        let body = items(&list, ObjectId::Body)[0];
        let top = body.model.transform_point3(Vec3::new(0.0, 1.0, 0.0));
        assert!(top.abs_diff_eq(figure.transform_point3(BODY_JOINT), 1e-4));

        // Top of each leg sits on its hip.
        for leg in items(&list, ObjectId::Leg) {
            let top = leg.model.transform_point3(Vec3::new(0.0, 1.0, 0.0));
            let hip_y = figure.transform_point3(BODY_JOINT + HIP_JOINT).y;
            assert!((top.y - hip_y).abs() < 1e-4);
        }
    }

    #[test]
    fn swing_moves_limbs_but_not_torso() {
        let objects = SceneObjects::standard().unwrap();
        let rest = compose(&objects, &Pose::REST);
        let moving = compose(&objects, &Pose::at(150, 600));

        assert_eq!(
            items(&rest, ObjectId::Body)[0].model,
            items(&moving, ObjectId::Body)[0].model
        );
        assert_ne!(
            items(&rest, ObjectId::Arm)[0].model,
            items(&moving, ObjectId::Arm)[0].model
        );
    }
}
