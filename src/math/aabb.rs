// Copyright 2020 @TwoCookingMice

use super::constants::{ Int, Float, Vector3f,
                       FLOAT_MIN, FLOAT_MAX };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AABB {
    pub p_min: Vector3f,
    pub p_max: Vector3f
}

impl Default for AABB {
    fn default() -> Self {
        Self { p_min: Vector3f::new(FLOAT_MAX, FLOAT_MAX, FLOAT_MAX),
               p_max: Vector3f::new(FLOAT_MIN, FLOAT_MIN, FLOAT_MIN) }
    }
}

impl AABB {
    pub fn new(p_min: Vector3f, p_max: Vector3f) -> Self {
        let mut min = Vector3f::new(0.0, 0.0, 0.0);
        let mut max = Vector3f::new(0.0, 0.0, 0.0);
        for idx in 0..3 {
            min[idx] = p_min[idx].min(p_max[idx]);
            max[idx] = p_max[idx].max(p_min[idx]);
        }
        Self { p_min: min, p_max: max }
    }

    pub fn center(&self) -> Vector3f {
        0.5f32 * self.p_min + 0.5f32 * self.p_max
    }

    pub fn expand_by_point(&mut self, p: &Vector3f) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(p[idx]);
            self.p_max[idx] = self.p_max[idx].max(p[idx]);
        }
    }

    pub fn expand_by_aabb(&mut self, other: &AABB) {
        for idx in 0..3 {
            self.p_min[idx] = self.p_min[idx].min(other.p_min[idx]);
            self.p_max[idx] = self.p_max[idx].max(other.p_max[idx]);
        }
    }

    pub fn contains_point(&self, p: &Vector3f) -> bool {
        for idx in 0..3 {
            if p[idx] < self.p_min[idx] || p[idx] > self.p_max[idx] {
                return false;
            }
        }

        true
    }

    pub fn contains_aabb(&self, other: &AABB) -> bool {
        self.contains_point(&other.p_min) && self.contains_point(&other.p_max)
    }

    pub fn surface_area(&self) -> Float {
        let a = self.p_max[0] - self.p_min[0];
        let b = self.p_max[1] - self.p_min[1];
        let c = self.p_max[2] - self.p_min[2];

        2.0f32 * (a*b + a*c + b*c)
    }

    pub fn volume(&self) -> Float {
        let a = self.p_max[0] - self.p_min[0];
        let b = self.p_max[1] - self.p_min[1];
        let c = self.p_max[2] - self.p_min[2];

        a * b * c
    }

    pub fn diagnal(&self) -> Vector3f {
        self.p_max - self.p_min
    }

    pub fn max_extent(&self) -> Int {
        let diagnal = self.diagnal();
        let ans: Int;
        if diagnal[0] > diagnal[1] && diagnal[0] > diagnal[2] {
            ans = 0;
        } else if diagnal[1] > diagnal[2] {
            ans = 1;
        } else {
            ans = 2;
        }

        ans
    }

    pub fn is_valid(&self) -> bool {
        let mut result = true;
        for idx in 0..3 {
            if self.p_min[idx] > self.p_max[idx] {
                result = false;
                break;
            }
        }

        result
    }
}

/* Test for AABB */
#[cfg(test)]
mod tests {
    use super::AABB;
    use super::Vector3f;

    #[test]
    fn test_aabb_geometry() {
        let min = Vector3f::new(1.0, 7.0, 3.0);
        let max = Vector3f::new(4.0, 4.0, 4.0);
        let mut bbox: AABB = AABB::new(min, max);

        // Corners are reordered so p_min is componentwise smaller.
        assert!((bbox.p_min[1] - 4.0f32).abs() < 0.000001);
        assert!((bbox.p_max[1] - 7.0f32).abs() < 0.000001);

        let center = bbox.center();
        assert!((center[0] - 2.5f32).abs() < 0.000001);
        assert!((center[1] - 5.5f32).abs() < 0.000001);
        assert!((center[2] - 3.5f32).abs() < 0.000001);

        let surface_area = bbox.surface_area();
        assert!((surface_area - 30.0f32).abs() < 0.000001);

        let volume = bbox.volume();
        assert!((volume - 9.0f32).abs() < 0.000001);

        bbox.expand_by_point(&Vector3f::new(-1.0, 5.0, 6.0));
        assert!((bbox.p_min[0] + 1.0f32).abs() < 0.000001);
        assert!((bbox.p_max[2] - 6.0f32).abs() < 0.000001);
        assert_eq!(bbox.max_extent(), 0);

        let mut bbox1: AABB = AABB::default();
        assert_eq!(bbox1.is_valid(), false);
        bbox1.expand_by_aabb(&bbox);
        assert_eq!(bbox1, bbox);
        assert_eq!(bbox1.is_valid(), true);
    }

    #[test]
    fn test_aabb_contains() {
        let bbox = AABB::new(Vector3f::new(-1.0, -1.0, -1.0),
                             Vector3f::new(1.0, 1.0, 1.0));

        assert_eq!(bbox.contains_point(&Vector3f::new(0.5, 0.5, -0.5)), true);
        assert_eq!(bbox.contains_point(&Vector3f::new(0.5, 1.5, -0.5)), false);

        let inner = AABB::new(Vector3f::new(-0.5, -0.5, 0.0),
                              Vector3f::new(0.5, 1.0, 1.0));
        let outer = AABB::new(Vector3f::new(-0.5, -0.5, 0.0),
                              Vector3f::new(0.5, 1.0, 2.0));
        assert_eq!(bbox.contains_aabb(&inner), true);
        assert_eq!(bbox.contains_aabb(&outer), false);
    }
}
