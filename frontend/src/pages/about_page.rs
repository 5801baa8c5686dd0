use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdBuild, MdSchedule, MdSupervisorAccount, MdTrendingUp, MdVerifiedUser, MdWork};
use dioxus_free_icons::{Icon, IconShape};

use crate::routes::Route;

struct Instructor {
    name: &'static str,
    specialization: &'static str,
    experience: &'static str,
    image: &'static str,
    bio: &'static str,
}

const INSTRUCTORS: [Instructor; 4] = [
    Instructor {
        name: "Dr. Vikram Patel",
        specialization: "Programming & Software Development",
        experience: "15+ years",
        image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=300",
        bio: "Expert in Java, C++, and enterprise application development with extensive industry experience.",
    },
    Instructor {
        name: "Priya Sharma",
        specialization: "Business Applications & Accounting",
        experience: "12+ years",
        image: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300",
        bio: "Certified Tally professional with expertise in accounting software and business process automation.",
    },
    Instructor {
        name: "Amit Singh",
        specialization: "Design & Graphics",
        experience: "10+ years",
        image: "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=300",
        bio: "Creative professional specializing in Adobe Creative Suite, 3D animation, and visual design.",
    },
    Instructor {
        name: "Neha Gupta",
        specialization: "Web Development",
        experience: "8+ years",
        image: "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=300",
        bio: "Full-stack developer with expertise in modern web technologies and responsive design.",
    },
];

const MILESTONES: [(&str, &str); 6] = [
    ("2012", "CSG Education founded with a vision to provide quality computer training"),
    ("2015", "Expanded to 3 specialized labs with advanced equipment"),
    ("2018", "Reached 5,000+ trained students milestone"),
    ("2020", "Introduced advanced courses in AI and Data Science"),
    ("2022", "Achieved 95% placement rate and industry recognition"),
    ("2024", "Over 10,000 successful students and growing strong"),
];


/// About page
#[component]
pub fn AboutPage() -> Element {
    rsx! {
        Title { "About CSG Education - Computer Training Institute | Expert Instructors & Modern Facilities" }
        section {
            class: "x-page-hero",
            h1 { "About CSG Education" }
            p { "Empowering careers through quality education and practical training for over a decade" }
        }

        section {
            style: "padding: 64px 24px; max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 48px; align-items: center;",
            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                h2 { class: "x-detail-heading", "Our Mission" }
                p {
                    style: "font-size: 18px; color: #374151; line-height: 1.7;",
                    "At CSG Education, we believe in transforming lives through quality education. Our mission is to provide practical, industry-relevant computer training that empowers students with the skills they need to succeed in today's competitive technology landscape."
                }
                p {
                    style: "font-size: 18px; color: #374151; line-height: 1.7;",
                    "We focus on hands-on learning, personalized attention, and career-oriented training that bridges the gap between academic knowledge and industry requirements."
                }
                div {
                    style: "background: #EFF6FF; border-radius: 12px; padding: 24px;",
                    h3 { style: "font-size: 20px; font-weight: 600; color: #1E40AF; margin-bottom: 12px;", "Our Vision" }
                    p {
                        style: "color: #1D4ED8;",
                        "To be the leading computer training institute that creates skilled professionals ready to excel in the digital economy and contribute to technological advancement."
                    }
                }
            }
            img {
                src: "https://images.pexels.com/photos/159751/book-address-book-learning-learn-159751.jpeg?auto=compress&cs=tinysrgb&w=600",
                alt: "Students learning computer skills",
                style: "width: 100%; aspect-ratio: 1; object-fit: cover; border-radius: 16px;",
            }
        }

        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                style: "max-width: 1200px; margin: 0 auto;",
                h2 { class: "x-section-title", "Why Choose CSG Education?" }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px;",
                    FeatureCard { icon: MdBuild, title: "Modern Infrastructure", text: "State-of-the-art computer labs with latest hardware and software" }
                    FeatureCard { icon: MdSupervisorAccount, title: "Expert Faculty", text: "Industry professionals with years of practical experience" }
                    FeatureCard { icon: MdVerifiedUser, title: "Proven Track Record", text: "12+ years of successful training with 95% job placement rate" }
                    FeatureCard { icon: MdTrendingUp, title: "Hands-on Learning", text: "Project-based curriculum with real-world applications" }
                    FeatureCard { icon: MdWork, title: "Career Support", text: "Job placement assistance and career guidance for all students" }
                    FeatureCard { icon: MdSchedule, title: "Flexible Timings", text: "Multiple batch options including weekends to fit your schedule" }
                }
            }
        }

        section {
            style: "padding: 64px 24px; max-width: 1200px; margin: 0 auto;",
            h2 { class: "x-section-title", "Meet Our Expert Instructors" }
            div {
                style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 32px;",
                for instructor in INSTRUCTORS.iter() {
                    div {
                        key: "{instructor.name}",
                        class: "card",
                        img { src: instructor.image, alt: instructor.name, style: "width: 100%; height: 192px; object-fit: cover;" }
                        div {
                            style: "padding: 24px;",
                            h3 { style: "font-size: 18px; font-weight: 600; color: #111827; margin-bottom: 4px;", "{instructor.name}" }
                            p { style: "color: #2563EB; font-weight: 500; font-size: 14px; margin-bottom: 8px;", "{instructor.specialization}" }
                            p { style: "color: #7C3AED; font-size: 14px; margin-bottom: 12px;", "Experience: {instructor.experience}" }
                            p { style: "color: #4B5563; font-size: 14px;", "{instructor.bio}" }
                        }
                    }
                }
            }
        }

        section {
            style: "padding: 64px 24px; background: #F9FAFB;",
            div {
                style: "max-width: 800px; margin: 0 auto;",
                h2 { class: "x-section-title", "Our Journey" }
                ol {
                    style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 24px;",
                    for (year, event) in MILESTONES {
                        li {
                            key: "{year}",
                            style: "display: flex; gap: 24px; align-items: center;",
                            span {
                                style: "flex-shrink: 0; width: 72px; height: 72px; border-radius: 9999px; background: #2563EB; color: white; display: flex; align-items: center; justify-content: center; font-weight: 700;",
                                "{year}"
                            }
                            p { class: "card", style: "padding: 16px; flex: 1; color: #374151;", "{event}" }
                        }
                    }
                }
            }
        }

        section {
            style: "padding: 64px 24px; background: #2563EB; color: white; text-align: center;",
            h2 { style: "font-family: Poppins, sans-serif; font-size: 30px; font-weight: 700; margin-bottom: 16px;", "Join Our Success Story" }
            p { style: "font-size: 20px; opacity: 0.9; margin-bottom: 32px;", "Become part of our growing community of skilled professionals" }
            div {
                style: "display: flex; gap: 16px; justify-content: center; flex-wrap: wrap;",
                Link { class: "btn-accent", to: Route::all_courses(), "Explore Courses" }
                Link { class: "btn-secondary", to: Route::ContactPage {}, "Contact Us" }
            }
        }
    }
}

#[component]
fn FeatureCard<I: IconShape + Clone + PartialEq + 'static>(icon: I, title: String, text: String) -> Element {
    rsx! {
        div {
            class: "card",
            style: "padding: 24px;",
            div {
                style: "width: 48px; height: 48px; border-radius: 8px; background: #DBEAFE; display: flex; align-items: center; justify-content: center; margin-bottom: 16px;",
                Icon { icon: icon, style: "width: 24px; height: 24px; color: #2563EB;" }
            }
            h3 { style: "font-size: 20px; font-weight: 600; color: #111827; margin-bottom: 8px;", "{title}" }
            p { style: "color: #4B5563;", "{text}" }
        }
    }
}
