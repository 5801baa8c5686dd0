//! Student success stories.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub course: &'static str,
    pub rating: u8,
    pub text: &'static str,
    pub image: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        course: "Java Programming",
        rating: 5,
        text: "Excellent training program! The instructors are very knowledgeable and the hands-on approach helped me land my dream job as a software developer.",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Rahul Singh",
        course: "Adobe Photoshop",
        rating: 5,
        text: "The best design training institute in the city. Professional environment, modern equipment, and industry-relevant curriculum. Highly recommended!",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Neha Gupta",
        course: "Tally ERP",
        rating: 5,
        text: "Great practical approach to learning. The Tally course helped me get promoted in my current job. Thank you CSG Education!",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
];

impl Testimonial {
    /// Filled and empty stars for a 5-star scale.
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        "★".repeat(filled) + &"☆".repeat(5 - filled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stars_are_capped_at_five() {
        assert_eq!(TESTIMONIALS[0].stars(), "★★★★★");
        let t = Testimonial { rating: 3, ..TESTIMONIALS[1] };
        assert_eq!(t.stars(), "★★★☆☆");
        let t = Testimonial { rating: 9, ..TESTIMONIALS[1] };
        assert_eq!(t.stars(), "★★★★★");
    }
}
