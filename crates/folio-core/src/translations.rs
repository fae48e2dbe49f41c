//! Static translation tables, keyed by dotted paths.
//!
//! French is the authoring language and the fallback for the other two.

pub static FR: &[(&str, &str)] = &[
    ("nav.home", "Accueil"),
    ("nav.about", "À Propos"),
    ("nav.skills", "Compétences"),
    ("nav.projects", "Projets"),
    ("nav.contact", "Contact"),
    ("hero.greeting", "Salut, je suis"),
    ("hero.name", "ACHRAF EL HOUFI"),
    (
        "hero.description",
        "Créateur d'expériences numériques exceptionnelles avec une passion pour l'innovation et les technologies de pointe.",
    ),
    ("hero.cta", "Découvrir mes projets"),
    ("hero.scroll_down", "Défiler vers le bas"),
    ("about.title", "À Propos de Moi"),
    (
        "about.subtitle",
        "Développeur passionné par la création d'expériences numériques exceptionnelles",
    ),
    ("about.download_cv", "Télécharger mon CV"),
    ("skills.title", "Compétences"),
    ("projects.title", "Mes Projets"),
    ("contact.title", "Me Contacter"),
    ("contact.form.name", "Nom"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Sujet"),
    ("contact.form.message", "Message"),
    ("contact.form.send", "Envoyer"),
    ("contact.form.sending", "Envoi en cours..."),
    ("contact.form.success", "Message envoyé avec succès !"),
    ("contact.form.error", "Une erreur est survenue, veuillez réessayer."),
    ("footer.rights", "Tous droits réservés."),
    ("error.generic", "Quelque chose s'est mal passé, veuillez actualiser la page."),
];

pub static EN: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About"),
    ("nav.skills", "Skills"),
    ("nav.projects", "Projects"),
    ("nav.contact", "Contact"),
    ("hero.greeting", "Hi, I am"),
    ("hero.name", "ACHRAF EL HOUFI"),
    (
        "hero.description",
        "Crafting exceptional digital experiences with a passion for innovation and cutting-edge technology.",
    ),
    ("hero.cta", "Discover my projects"),
    ("hero.scroll_down", "Scroll down"),
    ("about.title", "About Me"),
    (
        "about.subtitle",
        "A developer passionate about building exceptional digital experiences",
    ),
    ("about.download_cv", "Download my CV"),
    ("skills.title", "Skills"),
    ("projects.title", "My Projects"),
    ("contact.title", "Get in Touch"),
    ("contact.form.name", "Name"),
    ("contact.form.email", "Email"),
    ("contact.form.subject", "Subject"),
    ("contact.form.message", "Message"),
    ("contact.form.send", "Send"),
    ("contact.form.sending", "Sending..."),
    ("contact.form.success", "Message sent successfully!"),
    ("contact.form.error", "Something went wrong, please try again."),
    ("footer.rights", "All rights reserved."),
    ("error.generic", "Something went wrong, please refresh the page."),
];

pub static AR: &[(&str, &str)] = &[
    ("nav.home", "الرئيسية"),
    ("nav.about", "من أنا"),
    ("nav.skills", "المهارات"),
    ("nav.projects", "المشاريع"),
    ("nav.contact", "تواصل"),
    ("hero.greeting", "مرحباً، أنا"),
    ("hero.name", "أشرف الحوفي"),
    (
        "hero.description",
        "أصنع تجارب رقمية استثنائية بشغف للابتكار وأحدث التقنيات.",
    ),
    ("hero.cta", "اكتشف مشاريعي"),
    ("hero.scroll_down", "مرر للأسفل"),
    ("about.title", "من أنا"),
    ("about.subtitle", "مطور شغوف ببناء تجارب رقمية استثنائية"),
    ("about.download_cv", "تحميل سيرتي الذاتية"),
    ("skills.title", "المهارات"),
    ("projects.title", "مشاريعي"),
    ("contact.title", "تواصل معي"),
    ("contact.form.name", "الاسم"),
    ("contact.form.email", "البريد الإلكتروني"),
    ("contact.form.subject", "الموضوع"),
    ("contact.form.message", "الرسالة"),
    ("contact.form.send", "إرسال"),
    ("contact.form.sending", "جارٍ الإرسال..."),
    ("contact.form.success", "تم إرسال الرسالة بنجاح!"),
    ("contact.form.error", "حدث خطأ ما، يرجى المحاولة مرة أخرى."),
    ("footer.rights", "جميع الحقوق محفوظة."),
    ("error.generic", "حدث خطأ ما، يرجى تحديث الصفحة."),
];
