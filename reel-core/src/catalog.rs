//! Built-in lesson catalog.
//!
//! Three movie scenes for practicing reported speech: the Justice
//! League recruitment scene, the Hyundai x Uncharted car-wash spot, and
//! the Audi Spider-Man driving test. Each scene carries its script with
//! the verbs under study marked, plus seven exercises with Russian and
//! Uzbek teaching notes.

use lazy_static::lazy_static;

use crate::lesson::{Exercise, Lesson, Scene};

lazy_static! {
    /// The built-in reported-speech lesson.
    pub static ref REPORTED_SPEECH: Lesson = Lesson::new("Reported Speech at the Movies")
        .with_scene(justice_league())
        .with_scene(uncharted())
        .with_scene(spiderman());
}

fn justice_league() -> Scene {
    Scene::new(
        "Video 1: Justice League",
        "Bruce Wayne Recruits Barry Allen. Tense, dark, and hilarious.",
    )
    .with_notes(
        "Брюс Уэйн нанимает Барри Аллена. Напряженно, мрачно и смешно.",
        "Bryus Ueyn Barri Allenni ishga oladi. Tarang, qorong'u va kulgili.",
    )
    .with_line("Bruce", "Barry Allen. Bruce Wayne.")
    .with_line_verbs(
        "Barry",
        "You said that like it explains why there is a total stranger in my place, sitting in the dark, in my second favorite chair.",
        "said, explains, is, sitting",
    )
    .with_line("Bruce", "Tell me about this.")
    .with_line_verbs(
        "Barry",
        "This is a person who looks exactly like me but who is definitely not me. Very attractive Jewish boy. Somebody who, I don't know, stole your pocket watch or railroads?",
        "is, looks, is, stole",
    )
    .with_line_verbs(
        "Bruce",
        "I know you have abilities. I just don't know what they are.",
        "know, have, are",
    )
    .with_line_verbs(
        "Barry",
        "My special skills include viola, web design, fluent in sign language, gorilla sign language.",
        "include",
    )
    .with_line("Bruce", "Silica-based quartz sand fabric. Abrasion resistant. Heat resistant.")
    .with_line_verbs("Barry", "Yeah, I do competitive ice dancing.", "do")
    .with_line_verbs(
        "Bruce",
        "That’s what they use on the space shuttle to prevent it from burning up on re-entry.",
        "use, prevent, burning",
    )
    .with_line_verbs(
        "Barry",
        "Look, whoever you are looking for, it’s not me.",
        "are looking",
    )
    .with_line_verbs("Barry", "You’re the Batman?", "are")
    .with_line_verbs("Bruce", "So, you’re fast.", "are")
    .with_line_verbs("Barry", "That feels like an oversimplification.", "feels")
    .with_line_verbs(
        "Bruce",
        "I’m putting together a team. People with special abilities. You see, I believe enemies are coming.",
        "putting, believe, are coming",
    )
    .with_line_verbs("Barry", "Stop right there. I’m in.", "Stop, am")
    .with_line("Bruce", "You are?")
    .with_line("Barry", "Yeah. I need friends.")
    .with_line("Bruce", "I’ll try to keep up.")
    .with_exercise(
        Exercise::new(
            "Exercise 1: The 'Backshift' Boogie",
            "Statements: Present → Past",
            "When reporting a statement from the past, we usually move the tense one step back.",
        )
        .with_teaching(
            "Правило Backshift: Если слова передаются в прошлом (He said...), глагол 'сдвигается' назад во времени. Present Simple становится Past Simple (is -> was, go -> went).",
            "Backshift qoidasi: Agar gap o'tgan zamonda aytilgan bo'lsa (He said...), fe'l zamoni bir qadam orqaga suriladi. Present Simple -> Past Simple (is -> was, go -> went) ga o'zgaradi.",
        )
        .with_shift(
            "Present Simple",
            "Past Simple",
            "I [am] Barry Allen.",
            "He said he [was] Barry Allen.",
        )
        .with_question(
            "Barry explained that Bruce ____ (sit) in his second favorite chair.",
            "was sitting",
        )
        .with_question(
            "Barry claimed that the person in the photo ____ (be) a very attractive Jewish boy.",
            "was",
        )
        .with_question("Bruce stated that he ____ (know) Barry had abilities.", "knew")
        .with_question("Barry insisted that he ____ (do) competitive ice dancing.", "did")
        .with_question("Bruce noted that the suit ____ (be) heat resistant.", "was")
        .with_question("Barry mentioned that he ____ (speak) gorilla sign language.", "spoke")
        .with_question("Barry said that he ____ (need) friends.", "needed"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 2: The Inquisition",
            "Wh- Questions",
            "Word order changes back to normal (Subject + Verb). No 'do' or 'did'.",
        )
        .with_teaching(
            "Косвенные вопросы: Порядок слов становится прямым (как в утверждении). Вспомогательные 'do/did' исчезают. He asked where I was (НЕ where was I).",
            "O'zlashtirma so'roq gaplar: So'z tartibi darak gapnikidek bo'ladi (Ega + Kesim). 'Do/did' yordamchi fe'llari tushib qoladi. He asked where I was (where was I EMAS).",
        )
        .with_shift(
            "Question Order",
            "Statement Order",
            "Who [are] you?",
            "He asked who I [was].",
        )
        .with_question("Bruce asked Barry what his abilities ____.", "were")
        .with_question("Barry wondered why there ____ a total stranger in his house.", "was")
        .with_question("Barry asked Bruce what 'brunch' ____.", "was")
        .with_question("Bruce inquired who ____ (steal) the pocket watch.", "stole")
        .with_question("Barry asked Bruce who he ____ (look) for.", "was looking")
        .with_question("Bruce asked how Barry ____ (get) his speed.", "got")
        .with_question("Barry wondered where Bruce ____ (buy) his car.", "bought"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 3: Yes/No Questions & Modals",
            "If / Whether / Could / Would",
            "Use 'if' or 'whether'. Can → Could. Will → Would.",
        )
        .with_teaching(
            "Для вопросов да/нет используйте 'if' или 'whether' (ли). Can меняется на Could, Will на Would.",
            "Ha/Yo'q so'roqlari uchun 'if' yoki 'whether' dan foydalaning. Can -> Could, Will -> Would ga o'zgaradi.",
        )
        .with_shift(
            "Direct Question",
            "If / Whether",
            "[Are] you fast?",
            "He asked [if] I was fast.",
        )
        .with_question("Barry asked Bruce ____ he was the Batman.", "if / whether")
        .with_question("Bruce asked Barry ____ he was fast.", "if / whether")
        .with_question("Barry asked ____ he ____ (can) keep the Batarang.", "if / could")
        .with_question("Bruce promised that he ____ (will) try to keep up.", "would")
        .with_question("Barry asked ____ the suit ____ (be) expensive.", "if / was")
        .with_question("Bruce asked ____ Barry ____ (want) to join.", "if / wanted")
        .with_question("Barry asked ____ they ____ (can) leave now.", "if / could"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 4: Commands & Requests",
            "Infinitives: (not) to + verb",
            "For commands ('Stop!'), we use tell/ask + object + (not) to + infinitive.",
        )
        .with_teaching(
            "Повелительное наклонение (Stop!) превращается в инфинитив (to stop). He told him to stop.",
            "Buyruq mayli (Stop!) infinitivga (to stop) aylanadi. He told him to stop.",
        )
        .with_shift(
            "Imperative",
            "Infinitive",
            "[Stop] right there.",
            "He told him [to stop] right there.",
        )
        .with_question("Bruce ordered Barry ____ (tell) him about the photo.", "to tell")
        .with_question("Barry told Bruce ____ (stop) right there.", "to stop")
        .with_question("The director told the actors ____ (get) into position.", "to get")
        .with_question("Bruce essentially asked Barry ____ (join) the team.", "to join")
        .with_question("Bruce told Barry ____ (keep) the secret.", "to keep")
        .with_question("He warned him ____ (not / fight) alone.", "not to fight")
        .with_question("Barry told Bruce ____ (buy) him lunch.", "to buy"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 5: Reporting Explanations",
            "Complex Ideas",
            "Subject + explained + that + subject + verb (backshifted)",
        )
        .with_teaching(
            "При объяснении используйте 'explained that'. Не забывайте менять время глагола.",
            "Tushuntirishda 'explained that' dan foydalaning. Fe'l zamonini o'zgartirishni unutmang.",
        )
        .with_shift(
            "Explanation",
            "Explained That...",
            "It [is] an oversimplification.",
            "He explained that it [was] an oversimplification.",
        )
        .with_question(
            "Barry explained that the Speed Force ____ (cause) him to burn a tremendous amount of calories.",
            "caused",
        )
        .with_question(
            "He described himself as a 'snack hole' because he ____ (eat) so much.",
            "ate",
        )
        .with_question(
            "Barry clarified that people ____ (require) a lot of focus to understand.",
            "required",
        )
        .with_question(
            "He explained that brunch ____ (be) just waiting in line for lunch.",
            "was",
        )
        .with_question("Bruce explained that enemies ____ (be) coming.", "were")
        .with_question("Barry explained that he ____ (do) web design.", "did")
        .with_question("He explained that the suit ____ (prevent) friction burns.", "prevented"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 6: Reporting 'Yes' and 'No'",
            "Agreed, Confirmed, Accepted",
            "We rarely say 'He said yes.' We use meaningful verbs.",
        )
        .with_teaching(
            "Вместо 'said yes' используйте глаголы agreed (согласился), admitted (признал), confirmed (подтвердил).",
            "'Said yes' o'rniga agreed (rozi bo'ldi), admitted (tan oldi), confirmed (tasdiqladi) fe'llaridan foydalaning.",
        )
        .with_shift(
            "Yes / No",
            "Reporting Verb",
            "[Yeah], I need friends.",
            "He [admitted] that he needed friends.",
        )
        .with_question(
            "When Bruce asked if he was in, Barry immediately ____ (agree) to join.",
            "agreed",
        )
        .with_question(
            "Bruce asked if he was the Batman, but he never explicitly ____ (confirm) it with words.",
            "confirmed",
        )
        .with_question("Barry ____ (admit) that he needed friends.", "admitted")
        .with_question(
            "When Bruce said he would try to keep up, he ____ (accept) the challenge.",
            "accepted",
        )
        .with_question("Barry ____ (agree) that the chair was comfortable.", "agreed")
        .with_question("Bruce ____ (confirm) that he was rich.", "confirmed")
        .with_question("Barry ____ (admit) he was afraid of bugs.", "admitted"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 7: Reporting Thoughts",
            "Realizations",
            "We report what people think or realize, not just what they say.",
        )
        .with_teaching(
            "Мы можем передавать мысли: realized (осознал), thought (подумал), believed (верил).",
            "Biz fikrlarni ham yetkaza olamiz: realized (anglab yetdi), thought (o'yladi), believed (ishondi).",
        )
        .with_shift(
            "Inner Monologue",
            "Past Realization",
            "(Thinks: It [is] Bruce Wayne!)",
            "He realized it [was] Bruce Wayne.",
        )
        .with_question(
            "When Bruce threw the Batarang, Barry suddenly ____ (realize) who Bruce was.",
            "realized",
        )
        .with_question("Bruce likely ____ (think) Barry was a bit strange.", "thought")
        .with_question("Barry ____ (figure out) that Bruce was rich.", "figured out")
        .with_question("Bruce ____ (believe) that enemies were coming.", "believed")
        .with_question("Barry ____ (think) Bruce was crazy at first.", "thought")
        .with_question("Bruce ____ (know) Barry would say yes.", "knew")
        .with_question("Barry ____ (realize) he wasn't alone anymore.", "realized"),
    )
}

fn uncharted() -> Scene {
    Scene::new(
        "Video 2: Hyundai x Uncharted",
        "Car Wash. Nathan Drake is dirty, tired, and dealing with awkward questions.",
    )
    .with_notes(
        "Автомойка. Нейтан Дрейк грязный, уставший и отвечает на неловкие вопросы.",
        "Mashina yuvish. Neytan Dreyk kir, charchagan va noqulay savollarga javob bermoqda.",
    )
    .with_line("Worker", "Nathan Drake. Not again.")
    .with_line_verbs("Nathan", "Treasure hunting. Dirty business.", "is")
    .with_line("Worker", "Yes, very.")
    .with_line_verbs("Nathan", "This is broken.", "is")
    .with_line_verbs("Clerk", "It’s not broken. No, that’s how it works.", "is, works")
    .with_line_verbs("Worker", "Mr. Drake! Car's ready!", "is")
    .with_line("Nathan", "Thanks.")
    .with_line("Worker", "See ya.")
    .with_exercise(
        Exercise::new(
            "Exercise 1: Complaints & Explanations",
            "Present to Past",
            "Backshift! Watch out for pronouns (I → he, my → his).",
        )
        .with_teaching(
            "При передаче жалоб меняйте местоимения и время. 'My car' -> 'His car'. 'It is' -> 'It was'.",
            "Shikoyatlarni yetkazganda olmosh va zamonni o'zgartiring. 'My car' -> 'His car'. 'It is' -> 'It was'.",
        )
        .with_shift(
            "Present Simple",
            "Past Simple",
            "This [is] broken.",
            "He complained that it [was] broken.",
        )
        .with_question("The worker muttered that it ____ (be) Nathan Drake again.", "was")
        .with_question(
            "Nathan explained that treasure hunting ____ (be) a dirty business.",
            "was",
        )
        .with_question("Nathan complained that the claw machine ____ (be) broken.", "was")
        .with_question(
            "The clerk insisted that the machine ____ (be / negative) broken.",
            "wasn't",
        )
        .with_question("Nathan said that he ____ (hate) washing cars.", "hated")
        .with_question("The worker said that mud ____ (be) everywhere.", "was")
        .with_question("Nathan stated that he ____ (need) a break.", "needed"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 2: Short Answers & Agreements",
            "Reporting Actions",
            "Yes → Agreed. No → Denied/Refused.",
        )
        .with_teaching(
            "Краткие ответы превращаются в глаголы действия: refused (отказался), agreed (согласился).",
            "Qisqa javoblar harakat fe'llariga aylanadi: refused (rad etdi), agreed (rozi bo'ldi).",
        )
        .with_shift(
            "Action / Response",
            "Reporting Verb",
            "[Yes], very.",
            "He [agreed] it was very dirty.",
        )
        .with_question(
            "When Nathan said it was a dirty business, the worker ____ that it was.",
            "agreed",
        )
        .with_question(
            "When Nathan claimed the machine was broken, the clerk ____ it.",
            "denied",
        )
        .with_question("The worker announced that the car ____ (be) ready.", "was")
        .with_question("Nathan thanked them and ____ (give) them a gold bar.", "gave")
        .with_question("The clerk ____ (refuse) to refund the money.", "refused")
        .with_question("Nathan ____ (nod) in agreement.", "nodded")
        .with_question("The worker ____ (confirm) the price.", "confirmed"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 3: Reporting 'Real' Facts",
            "Timeless Truths (Backshifted for practice)",
            "Sometimes facts stay true, but we backshift for narrative consistency.",
        )
        .with_teaching(
            "Даже если факт верен сейчас, в рассказе о прошлом мы часто используем прошедшее время для согласования.",
            "Haqiqat hozir ham to'g'ri bo'lsa-da, o'tgan zamon hikoyasida moslashish uchun o'tgan zamon ishlatiladi.",
        )
        .with_shift(
            "General Truth",
            "Reported Fact",
            "That [is] how it works.",
            "He said that [was] how it worked.",
        )
        .with_question(
            "The clerk explained that that ____ (be) how the machine worked.",
            "was",
        )
        .with_question(
            "Nathan realized that treasure hunting ____ (make) the car very dirty.",
            "made",
        )
        .with_question(
            "The commercial showed that the car ____ (look) brand new after a wash.",
            "looked",
        )
        .with_question(
            "The spider probably thought the car ____ (be) a nice place to sit.",
            "was",
        )
        .with_question("He knew that gold ____ (be) heavy.", "was")
        .with_question("Nathan realized that machines ____ (be) rigged.", "were")
        .with_question("The worker knew who Nathan ____ (be).", "was"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 4: Reporting Commands (Implicit)",
            "Contextual Commands",
            "Use verbs like: warn, remind, call.",
        )
        .with_teaching(
            "Скрытые команды: 'Car's ready!' = напомнил, что машина готова. Используйте remind, call, warn.",
            "Yashirin buyruqlar: 'Car's ready!' = mashina tayyorligini eslatdi. Remind, call, warn dan foydalaning.",
        )
        .with_shift(
            "Implicit Command",
            "Infinitive",
            "Car's ready!",
            "He called to [remind] him.",
        )
        .with_question(
            "The worker called out to ____ (remind) Mr. Drake that his car was ready.",
            "remind",
        )
        .with_question(
            "The sign on the wall warned customers ____ (stop) their engines.",
            "to stop",
        )
        .with_question("Nathan likely wanted the workers ____ (clean) the mud off.", "to clean")
        .with_question("The clerk told Nathan ____ (leave) the machine alone.", "to leave")
        .with_question("The boss told the workers ____ (hurry) up.", "to hurry")
        .with_question("Nathan asked them ____ (be) careful.", "to be")
        .with_question("He told them ____ (keep) the change.", "to keep"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 5: Reporting Contradictions",
            "The Argument",
            "Verbs: insisted, denied, argued, claimed.",
        )
        .with_teaching(
            "Для споров используйте: insisted (настаивал), denied (отрицал), argued (спорил).",
            "Bahslar uchun: insisted (turib oldi), denied (rad etdi), argued (bahslashdi).",
        )
        .with_shift(
            "Contradiction",
            "Insisted/Denied",
            "It's [not] broken.",
            "He [insisted] it wasn't broken.",
        )
        .with_question(
            "Nathan claimed the machine was broken, but the clerk ____ (insist) that it wasn't.",
            "insisted",
        )
        .with_question(
            "The clerk argued that that ____ (be) simply how the machine worked.",
            "was",
        )
        .with_question("Nathan ____ (deny) that the machine was working correctly.", "denied")
        .with_question("They ____ (argue) about whether the machine was functional.", "argued")
        .with_question("The worker ____ (claim) he cleaned the wheels.", "claimed")
        .with_question("Nathan ____ (insist) on paying with gold.", "insisted")
        .with_question("The clerk ____ (deny) seeing the spider.", "denied"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 6: Reporting Observations",
            "Sensory Verbs",
            "Subject + noticed/saw + that...",
        )
        .with_teaching(
            "Глаголы восприятия: saw (увидел), noticed (заметил), felt (почувствовал).",
            "Sezgi fe'llari: saw (ko'rdi), noticed (payqadi), felt (his qildi).",
        )
        .with_shift(
            "Observation",
            "Noticed That",
            "(Sees spider)",
            "He [saw] a spider.",
        )
        .with_question("The worker ____ (notice) that Nathan was back again.", "noticed")
        .with_question("Nathan ____ (see) a spider crawling on the chair.", "saw")
        .with_question(
            "The staff ____ (observe) that the car was extremely muddy.",
            "observed",
        )
        .with_question("Nathan ____ (find) that the claw machine was frustrating.", "found")
        .with_question("He ____ (notice) the gold bar was heavy.", "noticed")
        .with_question("The worker ____ (see) Nathan leave.", "saw")
        .with_question("Nathan ____ (feel) tired.", "felt"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 7: Reporting Greetings",
            "Social niceties",
            "Verbs: greeted, thanked, bid farewell.",
        )
        .with_teaching(
            "Приветствия и прощания: greeted (поприветствовал), thanked (поблагодарил), said goodbye (попрощался).",
            "Salomlashish va xayrlashish: greeted (salomlashdi), thanked (minnatdorchilik bildirdi), said goodbye (xayrlashdi).",
        )
        .with_shift("Greeting", "Greeted", "See ya.", "He [said] goodbye.")
        .with_question(
            "The worker ____ (greet) Nathan by saying 'Not again.'",
            "greeted",
        )
        .with_question("Nathan ____ (thank) the worker for the wash.", "thanked")
        .with_question(
            "As he drove away, the worker ____ (say) 'See ya' to Nathan.",
            "said",
        )
        .with_question(
            "Nathan didn't strictly say goodbye; he just ____ (hand) them gold.",
            "handed",
        )
        .with_question("The clerk ____ (welcome) the next customer.", "welcomed")
        .with_question("They ____ (wave) goodbye.", "waved")
        .with_question("Nathan ____ (nod) hello.", "nodded"),
    )
}

fn spiderman() -> Scene {
    Scene::new(
        "Video 3: Audi Spider-Man",
        "The Driving Test. Peter Parker is a nervous superhero.",
    )
    .with_notes(
        "Экзамен по вождению. Питер Паркер - нервный супергерой.",
        "Haydovchilik imtihoni. Piter Parker - asabiy superqahramon.",
    )
    .with_line("Instructor", "I got a Parker Peter. Let's go.")
    .with_line_verbs("Peter", "It’s actually my friend Tony’s. It’s a prototype.", "is")
    .with_line("Instructor", "Wish I had a friend named Tony. Put your hands at 9 and 3.")
    .with_line_verbs("Peter", "I thought it was 10 and 2?", "thought, was")
    .with_line_verbs(
        "Instructor",
        "It was 10 and 2. But now it’s 9 and 3. You are going to lose five points for that.",
        "was, is, are going to lose",
    )
    .with_line("Instructor", "Whoa! Don't be a hero.")
    .with_line("Instructor", "Slow down! Don't do that.")
    .with_line_verbs(
        "Instructor",
        "It’s going to be close. You fail, I fail.",
        "is going to be, fail",
    )
    .with_line_verbs("Peter", "Did I pass?", "pass")
    .with_line_verbs("Instructor", "I passed you. Just go.", "passed, go")
    .with_exercise(
        Exercise::new(
            "Exercise 1: Commands & Imperatives",
            "Don't do it!",
            "Ordered/Told/Warned + object + (not) to + verb.",
        )
        .with_teaching(
            "Приказы (Do this!) становятся инфинитивом (to do this). Запреты (Don't do!) становятся 'not to do'.",
            "Buyruqlar (Do this!) infinitivga (to do this) aylanadi. Taqiqlar (Don't do!) 'not to do' bo'ladi.",
        )
        .with_shift(
            "Imperative",
            "Infinitive",
            "[Put] your hands at 9 and 3.",
            "He told him [to put] his hands at 9 and 3.",
        )
        .with_question(
            "The instructor told Peter ____ (put) his hands at 9 and 3.",
            "to put",
        )
        .with_question("He warned Peter ____ (not / be) a hero.", "not to be")
        .with_question("He shouted at Peter ____ (slow) down.", "to slow")
        .with_question(
            "When Peter took his hands off the wheel, the instructor yelled at him ____ (not / do) that.",
            "not to do",
        )
        .with_question("The instructor told him ____ (watch) the road.", "to watch")
        .with_question("He ordered Peter ____ (start) the car.", "to start")
        .with_question("Peter told the car ____ (brake).", "to brake"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 2: Reporting Uncertainty",
            "Questions & Thoughts",
            "Past Simple → Past Perfect (had + V3).",
        )
        .with_teaching(
            "Если в прямой речи Past Simple (I thought...), в косвенной используем Past Perfect (he had thought...).",
            "Agar ko'chirma gapda Past Simple (I thought...) bo'lsa, o'zlashtirma gapda Past Perfect (he had thought...) ishlatamiz.",
        )
        .with_shift(
            "Past Simple",
            "Past Perfect",
            "I [thought] it was 10 and 2.",
            "He said he [had thought] it was 10 and 2.",
        )
        .with_question(
            "Peter replied that he ____ (think) the rule was 10 and 2.",
            "had thought",
        )
        .with_question(
            "The instructor asked if there ____ (be) a Parker Peter in the room.",
            "was",
        )
        .with_question(
            "Peter asked if he ____ (lose) five points for that.",
            "lost / would lose",
        )
        .with_question(
            "Peter asked the instructor what he ____ (say) about heroes.",
            "had said",
        )
        .with_question("Peter wondered if he ____ (fail) the test.", "had failed")
        .with_question("The instructor asked where he ____ (learn) to drive.", "had learned")
        .with_question("Peter wasn't sure if he ____ (hear) correctly.", "had heard"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 3: Future in the Past",
            "Predictions",
            "'is going to' → 'was going to'. 'will' → 'would'.",
        )
        .with_teaching(
            "Будущее в прошедшем: 'is going to' меняется на 'was going to'. 'will' меняется на 'would'.",
            "O'tgan zamondagi kelasi zamon: 'is going to' -> 'was going to' ga, 'will' -> 'would' ga o'zgaradi.",
        )
        .with_shift(
            "Future (going to)",
            "Future in Past",
            "It [is going to] be close.",
            "He said it [was going to] be close.",
        )
        .with_question(
            "The instructor stated that Peter ____ (be going to) lose five points.",
            "was going to",
        )
        .with_question(
            "He warned that it ____ (be going to) be a close result.",
            "was going to",
        )
        .with_question(
            "The instructor wished that he ____ (have) a friend named Tony.",
            "had",
        )
        .with_question("Peter probably hoped he ____ (will / pass) the test.", "would pass")
        .with_question("Peter thought he ____ (be going to) crash.", "was going to")
        .with_question("The instructor said he ____ (will / be) sick.", "would be")
        .with_question("They knew it ____ (be going to) be a long day.", "was going to"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 4: Mixed Reporting",
            "The Chaos",
            "Combining statements, questions, and commands.",
        )
        .with_teaching(
            "Смешанные типы: Когда мы объединяем вопросы, команды и утверждения в одном рассказе.",
            "Aralash turlar: Hikoyada savollar, buyruqlar va darak gaplarni birlashtirganimizda.",
        )
        .with_shift(
            "Mixed Tenses",
            "Reported Narrative",
            "Did I pass?",
            "He asked if he [had passed].",
        )
        .with_question(
            "Peter mentioned that the car ____ (belong) to his friend Tony.",
            "belonged",
        )
        .with_question(
            "The instructor mumbled that he ____ (notice) everything, even the eyeballing.",
            "noticed",
        )
        .with_question("After the fight, Peter asked if he ____ (pass).", "had passed")
        .with_question("The instructor simply told him ____ (go).", "to go")
        .with_question("Peter explained that the car ____ (be) a prototype.", "was")
        .with_question("The instructor asked why he ____ (stop).", "had stopped")
        .with_question("He told Peter ____ (focus).", "to focus"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 5: Reporting Threats",
            "Warnings",
            "Subject + threatened + to + infinitive OR Subject + warned + that...",
        )
        .with_teaching(
            "Угрозы и предупреждения: threatened to (угрожал), warned that (предупредил, что).",
            "Tahdid va ogohlantirishlar: threatened to (tahdid qildi), warned that (ogohlantirdiki).",
        )
        .with_shift(
            "Threat",
            "Threatened To",
            "You fail, I fail.",
            "He [threatened] to fail him.",
        )
        .with_question(
            "The instructor ____ (threaten) to fail Peter if he failed himself.",
            "threatened",
        )
        .with_question(
            "He ____ (warn) Peter that he would lose points for eyeballing him.",
            "warned",
        )
        .with_question(
            "He ____ (remind) Peter that changing lanes without a signal was a failure.",
            "reminded",
        )
        .with_question("He ____ (caution) Peter not to try to be a hero.", "cautioned")
        .with_question("The instructor ____ (threaten) to vomit.", "threatened")
        .with_question("He ____ (warn) him about the speed limit.", "warned")
        .with_question(
            "The instructor ____ (threaten) to get out of the car.",
            "threatened",
        ),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 6: Reporting Apologies",
            "Gerunds",
            "Subject + apologized + for + -ing verb.",
        )
        .with_teaching(
            "Извинения: Apologized for + глагол с окончанием -ing (doing something).",
            "Uzr so'rash: Apologized for + -ing qo'shimchali fe'l (doing something).",
        )
        .with_shift(
            "Sorry",
            "Apologized For",
            "Sorry!",
            "He [apologized for] taking his hands off.",
        )
        .with_question(
            "Peter ____ (apologize) for taking his hands off the wheel.",
            "apologized",
        )
        .with_question("Peter said 'Sorry' because he ____ (make) a mistake.", "had made")
        .with_question("The instructor didn't ____ (apologize) for being mean.", "apologize")
        .with_question("Peter felt bad and ____ (say) sorry twice.", "said")
        .with_question("Peter ____ (apologize) for driving too fast.", "apologized")
        .with_question("He ____ (regret) almost crashing.", "regretted")
        .with_question("The instructor ____ (forgive) him eventually.", "forgave"),
    )
    .with_exercise(
        Exercise::new(
            "Exercise 7: Reporting Exclamations",
            "Emotion!",
            "Verbs: exclaimed, shouted, yelled.",
        )
        .with_teaching(
            "Восклицания: shouted (крикнул), yelled (вопил), exclaimed (воскликнул).",
            "Undovlar: shouted (baqirdi), yelled (qichqirdi), exclaimed (xitob qildi).",
        )
        .with_shift(
            "Exclamation",
            "Shouted/Yelled",
            "Whoa!",
            "He [shouted] whoa.",
        )
        .with_question(
            "When the car stopped automatically, the instructor ____ (shout) 'Whoa!'",
            "shouted",
        )
        .with_question(
            "Peter ____ (ask) in confusion what the instructor had said.",
            "asked",
        )
        .with_question("The instructor ____ (yell) at Peter to slow down.", "yelled")
        .with_question(
            "Peter was surprised and ____ (wonder) if he had passed.",
            "wondered",
        )
        .with_question("The instructor ____ (scream) when Peter accelerated.", "screamed")
        .with_question("Peter ____ (exclaim) that it was a prototype.", "exclaimed")
        .with_question("He ____ (yell) 'Don't do that!'", "yelled"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::BLANK;

    #[test]
    fn test_catalog_shape() {
        let lesson = &*REPORTED_SPEECH;
        assert_eq!(lesson.scenes.len(), 3);
        for scene in &lesson.scenes {
            assert_eq!(scene.exercises.len(), 7);
            assert!(!scene.script.is_empty());
            for exercise in &scene.exercises {
                assert_eq!(exercise.questions.len(), 7);
                assert!(exercise.shift.is_some());
                assert!(exercise.teaching.is_some());
            }
        }
    }

    #[test]
    fn test_every_prompt_has_a_blank() {
        for scene in &REPORTED_SPEECH.scenes {
            for exercise in &scene.exercises {
                for question in &exercise.questions {
                    assert!(
                        question.prompt.contains(BLANK),
                        "prompt without blank: {}",
                        question.prompt
                    );
                }
            }
        }
    }

    #[test]
    fn test_no_answer_label_is_empty() {
        for scene in &REPORTED_SPEECH.scenes {
            for exercise in &scene.exercises {
                for question in &exercise.questions {
                    assert!(!question.primary_alternative().is_empty());
                }
            }
        }
    }
}
