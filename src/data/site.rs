// Fixed copy for the home page sections.

pub struct NavLink {
    pub name: &'static str,
    pub target: NavTarget,
}

#[derive(Clone, Copy, PartialEq)]
pub enum NavTarget {
    Section(&'static str),
    Blog,
    Careers,
}

pub static NAV_LINKS: [NavLink; 6] = [
    NavLink { name: "Services", target: NavTarget::Section("services") },
    NavLink { name: "About", target: NavTarget::Section("about") },
    NavLink { name: "Projects", target: NavTarget::Section("projects") },
    NavLink { name: "Careers", target: NavTarget::Careers },
    NavLink { name: "Blog", target: NavTarget::Blog },
    NavLink { name: "Contact", target: NavTarget::Section("contact") },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
    pub stat: &'static str,
}

pub static SERVICES: [Service; 6] = [
    Service {
        title: "Web Development",
        description: "Modern, scalable web applications built with cutting-edge technologies for optimal performance and user experience.",
        features: ["React & Next.js", "TypeScript", "API Integration", "Performance Optimization"],
        stat: "500+ Projects",
    },
    Service {
        title: "Mobile Apps",
        description: "Native and cross-platform mobile solutions that deliver seamless experiences across iOS and Android.",
        features: ["React Native", "Flutter", "Native iOS/Android", "App Store Optimization"],
        stat: "200+ Apps",
    },
    Service {
        title: "Cloud Solutions",
        description: "Scalable cloud infrastructure and migration services for enterprise-grade reliability and performance.",
        features: ["AWS & Azure", "Kubernetes", "Serverless", "Auto-scaling"],
        stat: "99.9% Uptime",
    },
    Service {
        title: "UI/UX Design",
        description: "Beautiful, intuitive interfaces designed with user psychology in mind to drive engagement and conversions.",
        features: ["User Research", "Wireframing", "Prototyping", "Design Systems"],
        stat: "50+ Designs",
    },
    Service {
        title: "Data Engineering",
        description: "Robust data pipelines and analytics solutions that transform raw data into actionable business insights.",
        features: ["ETL Pipelines", "Data Warehousing", "Real-time Analytics", "ML Integration"],
        stat: "10TB+ Processed",
    },
    Service {
        title: "Cybersecurity",
        description: "Comprehensive security solutions to protect your digital assets, data, and customer information.",
        features: ["Penetration Testing", "Security Audits", "Compliance", "24/7 Monitoring"],
        stat: "Zero Breaches",
    },
];

/// A number that counts up when it scrolls into view.
#[derive(Clone, Copy, PartialEq)]
pub struct Figure {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
}

pub static ABOUT_STATS: [Figure; 4] = [
    Figure { value: 150, suffix: "+", label: "Projects Delivered", hint: "" },
    Figure { value: 50, suffix: "+", label: "Happy Clients", hint: "" },
    Figure { value: 8, suffix: "+", label: "Years Experience", hint: "" },
    Figure { value: 25, suffix: "+", label: "Team Members", hint: "" },
];

pub static IMPACT_METRICS: [Figure; 4] = [
    Figure { value: 14, suffix: "d", label: "Avg. release cadence", hint: "Ship every two weeks" },
    Figure { value: 38, suffix: "%", label: "Performance uplift", hint: "Measured on Lighthouse" },
    Figure { value: 22, suffix: "%", label: "Conversion increase", hint: "Across key funnels" },
    Figure { value: 4, suffix: "x", label: "Stakeholder alignment", hint: "Fewer revision loops" },
];

#[derive(Debug, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub accent: &'static str,
}

pub static PROJECTS: [Project; 4] = [
    Project {
        title: "FinTech Dashboard",
        category: "Web Application",
        description: "Real-time financial analytics platform with advanced data visualization.",
        accent: "#3b82f6",
    },
    Project {
        title: "HealthCare App",
        category: "Mobile Development",
        description: "Patient management system with telemedicine integration.",
        accent: "#10b981",
    },
    Project {
        title: "E-Commerce Platform",
        category: "Full Stack",
        description: "Scalable marketplace with AI-powered recommendations.",
        accent: "#f59e0b",
    },
    Project {
        title: "IoT Management System",
        category: "Cloud Solutions",
        description: "Enterprise IoT platform managing millions of connected devices.",
        accent: "#a855f7",
    },
];

/// Distinct project categories in first-seen order.
pub fn project_categories() -> Vec<&'static str> {
    let mut categories: Vec<&'static str> = Vec::new();
    for project in &PROJECTS {
        if !categories.contains(&project.category) {
            categories.push(project.category);
        }
    }
    categories
}

/// `None` means every project.
pub fn projects_in(category: Option<&str>) -> Vec<&'static Project> {
    PROJECTS
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect()
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub quote: &'static str,
    pub rating: u8,
}

pub static TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "CEO, TechVentures",
        initials: "SJ",
        quote: "Insightexus transformed our digital presence completely. Their team delivered a world-class platform that exceeded our expectations. The attention to detail and technical expertise is unmatched.",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "CTO, FinanceFlow",
        initials: "MC",
        quote: "Working with Insightexus was a game-changer for our startup. They built our entire fintech infrastructure from scratch, delivering on time and within budget. Highly recommended!",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "Product Lead, HealthFirst",
        initials: "ER",
        quote: "The mobile app they developed for us has over 100k downloads and a 4.9-star rating. Their UI/UX expertise and development skills are truly exceptional.",
        rating: 5,
    },
    Testimonial {
        name: "David Kim",
        role: "Founder, CloudScale",
        initials: "DK",
        quote: "Insightexus helped us migrate our entire infrastructure to the cloud. The process was seamless, and we've seen a 40% reduction in operational costs since then.",
        rating: 5,
    },
    Testimonial {
        name: "Amanda Foster",
        role: "Director, RetailMax",
        initials: "AF",
        quote: "Our e-commerce platform built by Insightexus handles millions of transactions monthly without a hitch. Their scalability solutions are top-notch.",
        rating: 5,
    },
];

pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub initials: &'static str,
    pub bio: &'static str,
}

pub static TEAM: [TeamMember; 6] = [
    TeamMember {
        name: "Alex Thompson",
        role: "CEO & Founder",
        initials: "AT",
        bio: "Visionary leader with 15+ years in tech. Former Google engineer with a passion for innovation.",
    },
    TeamMember {
        name: "Maria Garcia",
        role: "CTO",
        initials: "MG",
        bio: "Full-stack architect specializing in scalable systems. Built platforms serving millions of users.",
    },
    TeamMember {
        name: "James Wilson",
        role: "Design Director",
        initials: "JW",
        bio: "Award-winning designer with expertise in creating memorable digital experiences.",
    },
    TeamMember {
        name: "Sophie Chen",
        role: "Lead Developer",
        initials: "SC",
        bio: "React & Node.js expert. Open source contributor with a focus on performance optimization.",
    },
    TeamMember {
        name: "Ryan Mitchell",
        role: "DevOps Lead",
        initials: "RM",
        bio: "Cloud infrastructure specialist. AWS & Azure certified with extensive Kubernetes experience.",
    },
    TeamMember {
        name: "Elena Kowalski",
        role: "Product Manager",
        initials: "EK",
        bio: "Strategic thinker bridging business and tech. MBA from Stanford with startup experience.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Support {
    Yes,
    Partial,
    No,
}

pub struct ComparisonRow {
    pub feature: &'static str,
    pub us: Support,
    pub others: Support,
}

pub static COMPARISON: [ComparisonRow; 10] = [
    ComparisonRow { feature: "Custom Development", us: Support::Yes, others: Support::Partial },
    ComparisonRow { feature: "24/7 Support", us: Support::Yes, others: Support::No },
    ComparisonRow { feature: "Dedicated Team", us: Support::Yes, others: Support::Partial },
    ComparisonRow { feature: "Agile Methodology", us: Support::Yes, others: Support::Yes },
    ComparisonRow { feature: "Free Consultation", us: Support::Yes, others: Support::No },
    ComparisonRow { feature: "Post-Launch Support", us: Support::Yes, others: Support::Partial },
    ComparisonRow { feature: "Transparent Pricing", us: Support::Yes, others: Support::No },
    ComparisonRow { feature: "Source Code Ownership", us: Support::Yes, others: Support::Partial },
    ComparisonRow { feature: "Scalable Architecture", us: Support::Yes, others: Support::Partial },
    ComparisonRow { feature: "Security Audits", us: Support::Yes, others: Support::No },
];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub static FAQS: [FaqEntry; 4] = [
    FaqEntry {
        question: "What industries do you specialize in?",
        answer: "We partner across SaaS, fintech, healthcare, and internal enterprise platforms, anywhere speed and reliability matter.",
    },
    FaqEntry {
        question: "How fast can we ship an MVP?",
        answer: "Typically 4 to 8 weeks depending on scope. We start with a discovery sprint, then build in weekly deliverable increments.",
    },
    FaqEntry {
        question: "Do you offer ongoing support after launch?",
        answer: "Yes. Monitoring, iterative improvements, and roadmap delivery. We can work as your product engineering partner.",
    },
    FaqEntry {
        question: "Can you work with our existing team?",
        answer: "Absolutely. We integrate into your workflow, tighten engineering standards, and help your team ship faster with confidence.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_distinct_and_ordered() {
        assert_eq!(
            project_categories(),
            vec!["Web Application", "Mobile Development", "Full Stack", "Cloud Solutions"]
        );
    }

    #[test]
    fn filtering_projects_by_category() {
        assert_eq!(projects_in(None).len(), PROJECTS.len());
        let cloud = projects_in(Some("Cloud Solutions"));
        assert_eq!(cloud.len(), 1);
        assert_eq!(cloud[0].title, "IoT Management System");
        assert!(projects_in(Some("Games")).is_empty());
    }
}
