//! Amateur observing lists, each entry defined by a backing designation.
//!
//! Bennett is complete. Herschel 400 carries 393 of its 400 entries; Dunlop
//! and Gum only their best-known members. Further rows can be supplied at run
//! time through an extra cross-reference file.

use crate::catalog::CatalogType::{self, Ic, Melotte, Ngc, Trumpler};

/// `(list designation, backing catalog, backing designation)`.
pub type XrefRow = (&'static str, CatalogType, &'static str);

#[rustfmt::skip]
pub static BENNETT: &[XrefRow] = &[
  ("1", Ngc, "55"),     ("2", Ngc, "104"),    ("3", Ngc, "247"),    ("4", Ngc, "253"),
  ("5", Ngc, "288"),    ("6", Ngc, "300"),    ("7", Ngc, "362"),    ("8", Ngc, "613"),
  ("9", Ngc, "1068"),   ("10", Ngc, "1097"),  ("10a", Ngc, "1232"), ("11", Ngc, "1261"),
  ("12", Ngc, "1291"),  ("13", Ngc, "1313"),  ("14", Ngc, "1316"),  ("14a", Ngc, "1350"),
  ("15", Ngc, "1360"),  ("16", Ngc, "1365"),  ("17", Ngc, "1380"),  ("18", Ngc, "1387"),
  ("19", Ngc, "1399"),  ("19a", Ngc, "1398"), ("20", Ngc, "1404"),  ("21", Ngc, "1433"),
  ("21a", Ngc, "1512"), ("22", Ngc, "1535"),  ("23", Ngc, "1549"),  ("24", Ngc, "1553"),
  ("25", Ngc, "1566"),  ("25a", Ngc, "1617"), ("26", Ngc, "1672"),  ("27", Ngc, "1763"),
  ("28", Ngc, "1783"),  ("29", Ngc, "1792"),  ("30", Ngc, "1818"),  ("31", Ngc, "1808"),
  ("32", Ngc, "1851"),  ("33", Ngc, "1866"),  ("34", Ngc, "1904"),  ("35", Ngc, "2070"),
  ("36", Ngc, "2214"),  ("36a", Ngc, "2243"), ("37", Ngc, "2298"),  ("37a", Ngc, "2467"),
  ("38", Ngc, "2489"),  ("39", Ngc, "2506"),  ("40", Ngc, "2627"),  ("40a", Ngc, "2671"),
  ("41", Ngc, "2808"),  ("41a", Ngc, "2972"), ("41b", Ngc, "2997"), ("42", Ngc, "3115"),
  ("43", Ngc, "3132"),  ("44", Ngc, "3201"),  ("45", Ngc, "3242"),  ("46", Ngc, "3621"),
  ("47", Melotte, "105"), ("48", Ngc, "3960"), ("49", Ngc, "3923"), ("50", Ngc, "4372"),
  ("51", Ngc, "4590"),  ("52", Ngc, "4594"),  ("53", Ngc, "4697"),  ("54", Ngc, "4699"),
  ("55", Ngc, "4753"),  ("56", Ngc, "4833"),  ("57", Ngc, "4945"),  ("58", Ngc, "4976"),
  ("59", Ngc, "5061"),  ("59a", Ngc, "5068"), ("60", Ngc, "5128"),  ("61", Ngc, "5139"),
  ("62", Ngc, "5189"),  ("63", Ngc, "5236"),  ("63a", Ngc, "5253"), ("64", Ngc, "5286"),
  ("65", Ngc, "5617"),  ("66", Ngc, "5634"),  ("67", Ngc, "5824"),  ("68", Ngc, "5897"),
  ("69", Ngc, "5927"),  ("70", Ngc, "5986"),  ("71", Ngc, "5999"),  ("72", Ngc, "6005"),
  ("72a", Trumpler, "23"), ("73", Ngc, "6093"), ("74", Ngc, "6101"), ("75", Ngc, "6121"),
  ("76", Ngc, "6134"),  ("77", Ngc, "6144"),  ("78", Ngc, "6139"),  ("79", Ngc, "6171"),
  ("79a", Ngc, "6167"), ("79b", Ngc, "6192"), ("80", Ngc, "6218"),  ("81", Ngc, "6216"),
  ("82", Ngc, "6235"),  ("83", Ngc, "6254"),  ("84", Ngc, "6253"),  ("85", Ngc, "6266"),
  ("86", Ngc, "6273"),  ("87", Ngc, "6284"),  ("88", Ngc, "6287"),  ("89", Ngc, "6293"),
  ("90", Ngc, "6304"),  ("91", Ngc, "6316"),  ("91a", Ngc, "6318"), ("92", Ngc, "6333"),
  ("93", Ngc, "6356"),  ("94", Ngc, "6352"),  ("95", Ngc, "6362"),  ("96", Ngc, "6388"),
  ("97", Ngc, "6402"),  ("98", Ngc, "6397"),  ("98a", Ngc, "6440"), ("98b", Ngc, "6445"),
  ("99", Ngc, "6441"),  ("100", Ngc, "6496"), ("101", Ngc, "6522"), ("102", Ngc, "6528"),
  ("103", Ngc, "6544"), ("104", Ngc, "6541"), ("105", Ngc, "6553"), ("106", Ngc, "6569"),
  ("107", Ngc, "6584"), ("107a", Ngc, "6603"), ("108", Ngc, "6618"), ("109", Ngc, "6624"),
  ("110", Ngc, "6626"), ("111", Ngc, "6638"), ("112", Ngc, "6637"), ("112a", Ngc, "6642"),
  ("113", Ngc, "6652"), ("114", Ngc, "6656"), ("115", Ngc, "6681"), ("116", Ngc, "6705"),
  ("117", Ngc, "6712"), ("118", Ngc, "6715"), ("119", Ngc, "6723"), ("120", Ngc, "6744"),
  ("121", Ngc, "6752"), ("122", Ngc, "6809"), ("123", Ngc, "6818"), ("124", Ngc, "6864"),
  ("125", Ngc, "6981"), ("126", Ngc, "7009"), ("127", Ngc, "7089"), ("128", Ngc, "7099"),
  ("129", Ngc, "7293"), ("129a", Ngc, "7410"), ("129b", Ic, "1459"), ("130", Ngc, "7793"),
];

#[rustfmt::skip]
pub static DUNLOP: &[XrefRow] = &[
  ("18", Ngc, "104"),   ("62", Ngc, "362"),   ("142", Ngc, "2070"), ("265", Ngc, "2808"),
  ("289", Ngc, "3766"), ("295", Ngc, "6752"), ("301", Ngc, "4755"), ("309", Ngc, "3372"),
  ("323", Ngc, "3532"), ("366", Ngc, "6397"), ("482", Ngc, "5128"), ("499", Ngc, "6231"),
  ("507", Ngc, "55"),   ("508", Ngc, "1851"),
];

#[rustfmt::skip]
pub static HERSCHEL_400: &[XrefRow] = &[
  ("IV-58", Ngc, "40"),      ("VIII-79", Ngc, "129"),   ("VI-35", Ngc, "136"),     ("II-3", Ngc, "157"),
  ("II-707", Ngc, "185"),    ("V-18", Ngc, "205"),      ("VIII-78", Ngc, "225"),   ("V-25", Ngc, "246"),
  ("V-20", Ngc, "247"),      ("V-1", Ngc, "253"),       ("I-159", Ngc, "278"),     ("VI-20", Ngc, "288"),
  ("VIII-64", Ngc, "381"),   ("II-224", Ngc, "404"),    ("VII-45", Ngc, "436"),    ("VII-42", Ngc, "457"),
  ("III-252", Ngc, "488"),   ("I-151", Ngc, "524"),     ("VII-48", Ngc, "559"),    ("I-100", Ngc, "584"),
  ("II-4", Ngc, "596"),      ("I-281", Ngc, "613"),     ("II-282", Ngc, "615"),    ("VII-49", Ngc, "637"),
  ("VII-46", Ngc, "654"),    ("VIII-65", Ngc, "659"),   ("VI-31", Ngc, "663"),     ("I-105", Ngc, "720"),
  ("VII-32", Ngc, "752"),    ("I-112", Ngc, "772"),     ("I-101", Ngc, "779"),     ("VI-33", Ngc, "869"),
  ("VI-34", Ngc, "884"),     ("V-19", Ngc, "891"),      ("I-153", Ngc, "908"),     ("IV-23", Ngc, "936"),
  ("I-102", Ngc, "1022"),    ("I-156", Ngc, "1023"),    ("VIII-66", Ngc, "1027"),  ("I-63", Ngc, "1052"),
  ("I-1", Ngc, "1055"),      ("I-64", Ngc, "1084"),     ("VI-25", Ngc, "1245"),    ("VIII-88", Ngc, "1342"),
  ("I-107", Ngc, "1407"),    ("VIII-80", Ngc, "1444"),  ("IV-53", Ngc, "1501"),    ("VII-47", Ngc, "1502"),
  ("VII-60", Ngc, "1513"),   ("IV-69", Ngc, "1514"),    ("VII-61", Ngc, "1528"),   ("IV-26", Ngc, "1535"),
  ("VIII-85", Ngc, "1545"),  ("VIII-8", Ngc, "1647"),   ("VIII-59", Ngc, "1664"),  ("V-32", Ngc, "1788"),
  ("VII-4", Ngc, "1817"),    ("VII-33", Ngc, "1857"),   ("VII-39", Ngc, "1907"),   ("I-261", Ngc, "1931"),
  ("III-747", Ngc, "1961"),  ("IV-21", Ngc, "1964"),    ("V-31", Ngc, "1980"),     ("IV-33", Ngc, "1999"),
  ("IV-34", Ngc, "2022"),    ("V-28", Ngc, "2024"),     ("VIII-68", Ngc, "2126"),  ("VIII-26", Ngc, "2129"),
  ("VI-17", Ngc, "2158"),    ("VIII-24", Ngc, "2169"),  ("IV-20", Ngc, "2185"),    ("VII-25", Ngc, "2186"),
  ("VI-5", Ngc, "2194"),     ("VII-13", Ngc, "2204"),   ("VII-20", Ngc, "2215"),   ("VIII-25", Ngc, "2232"),
  ("VII-2", Ngc, "2244"),    ("VIII-3", Ngc, "2251"),   ("IV-2", Ngc, "2261"),     ("VIII-5", Ngc, "2264"),
  ("VI-21", Ngc, "2266"),    ("VIII-71", Ngc, "2281"),  ("VIII-31", Ngc, "2286"),  ("VI-27", Ngc, "2301"),
  ("VI-2", Ngc, "2304"),     ("VIII-60", Ngc, "2311"),  ("VII-38", Ngc, "2324"),   ("VIII-32", Ngc, "2335"),
  ("VIII-33", Ngc, "2343"),  ("VIII-34", Ngc, "2353"),  ("VII-16", Ngc, "2354"),   ("VI-6", Ngc, "2355"),
  ("VII-12", Ngc, "2360"),   ("VII-17", Ngc, "2362"),   ("II-316", Ngc, "2371"),   ("II-317", Ngc, "2372"),
  ("IV-45", Ngc, "2392"),    ("VIII-11", Ngc, "2395"),  ("V-44", Ngc, "2403"),     ("I-218", Ngc, "2419"),
  ("VI-1", Ngc, "2420"),     ("VII-67", Ngc, "2421"),   ("VII-28", Ngc, "2423"),   ("IV-39", Ngc, "2438"),
  ("IV-64", Ngc, "2440"),    ("VII-58", Ngc, "2479"),   ("VII-10", Ngc, "2482"),   ("VII-23", Ngc, "2489"),
  ("VI-37", Ngc, "2506"),    ("VIII-1", Ngc, "2509"),   ("VIII-30", Ngc, "2527"),  ("VII-11", Ngc, "2539"),
  ("VII-64", Ngc, "2567"),   ("VIII-39", Ngc, "2571"),  ("II-266", Ngc, "2613"),   ("VII-63", Ngc, "2627"),
  ("I-288", Ngc, "2655"),    ("I-242", Ngc, "2681"),    ("I-200", Ngc, "2683"),    ("I-249", Ngc, "2742"),
  ("I-250", Ngc, "2768"),    ("I-2", Ngc, "2775"),      ("I-167", Ngc, "2782"),    ("I-216", Ngc, "2787"),
  ("I-505", Ngc, "2811"),    ("I-205", Ngc, "2841"),    ("I-137", Ngc, "2859"),    ("I-56", Ngc, "2903"),
  ("IV-68", Ngc, "2950"),    ("I-114", Ngc, "2964"),    ("I-61", Ngc, "2974"),     ("I-285", Ngc, "2976"),
  ("I-78", Ngc, "2985"),     ("I-286", Ngc, "3077"),    ("V-47", Ngc, "3079"),     ("I-163", Ngc, "3115"),
  ("I-79", Ngc, "3147"),     ("I-3", Ngc, "3166"),      ("I-4", Ngc, "3169"),      ("I-168", Ngc, "3184"),
  ("II-44", Ngc, "3190"),    ("II-45", Ngc, "3193"),    ("I-199", Ngc, "3198"),    ("II-28", Ngc, "3226"),
  ("II-29", Ngc, "3227"),    ("IV-27", Ngc, "3242"),    ("I-86", Ngc, "3245"),     ("II-359", Ngc, "3277"),
  ("I-164", Ngc, "3294"),    ("IV-60", Ngc, "3310"),    ("I-81", Ngc, "3344"),     ("II-99", Ngc, "3377"),
  ("I-18", Ngc, "3384"),     ("I-116", Ngc, "3395"),    ("I-27", Ngc, "3412"),     ("II-362", Ngc, "3414"),
  ("I-172", Ngc, "3432"),    ("I-87", Ngc, "3486"),     ("II-101", Ngc, "3489"),   ("I-88", Ngc, "3504"),
  ("I-13", Ngc, "3521"),     ("I-29", Ngc, "3593"),     ("II-50", Ngc, "3607"),    ("II-51", Ngc, "3608"),
  ("I-270", Ngc, "3610"),    ("I-271", Ngc, "3613"),    ("I-244", Ngc, "3619"),    ("I-241", Ngc, "3621"),
  ("II-52", Ngc, "3626"),    ("V-8", Ngc, "3628"),      ("I-226", Ngc, "3631"),    ("II-33", Ngc, "3640"),
  ("I-5", Ngc, "3655"),      ("I-219", Ngc, "3665"),    ("I-194", Ngc, "3675"),    ("II-160", Ngc, "3686"),
  ("II-730", Ngc, "3726"),   ("I-222", Ngc, "3729"),    ("I-21", Ngc, "3810"),     ("I-94", Ngc, "3813"),
  ("I-201", Ngc, "3877"),    ("II-738", Ngc, "3893"),   ("I-228", Ngc, "3898"),    ("I-82", Ngc, "3900"),
  ("II-336", Ngc, "3912"),   ("I-203", Ngc, "3938"),    ("I-173", Ngc, "3941"),    ("I-251", Ngc, "3945"),
  ("I-202", Ngc, "3949"),    ("V-45", Ngc, "3953"),     ("I-67", Ngc, "3962"),     ("IV-62", Ngc, "3982"),
  ("I-229", Ngc, "3998"),    ("I-223", Ngc, "4026"),    ("II-296", Ngc, "4027"),   ("I-121", Ngc, "4030"),
  ("I-253", Ngc, "4036"),    ("IV-28.1", Ngc, "4038"),  ("IV-28.2", Ngc, "4039"),  ("I-252", Ngc, "4041"),
  ("IV-56", Ngc, "4051"),    ("I-224", Ngc, "4085"),    ("I-206", Ngc, "4088"),    ("I-225", Ngc, "4102"),
  ("I-195", Ngc, "4111"),    ("IV-54", Ngc, "4143"),    ("I-19", Ngc, "4147"),     ("I-73", Ngc, "4150"),
  ("I-165", Ngc, "4151"),    ("I-9", Ngc, "4179"),      ("I-175", Ngc, "4203"),    ("I-95", Ngc, "4214"),
  ("I-35", Ngc, "4216"),     ("V-41", Ngc, "4244"),     ("I-74", Ngc, "4245"),     ("I-89", Ngc, "4251"),
  ("II-139", Ngc, "4261"),   ("II-569", Ngc, "4273"),   ("I-75", Ngc, "4274"),     ("I-90", Ngc, "4278"),
  ("II-573", Ngc, "4281"),   ("V-5", Ngc, "4293"),      ("I-76", Ngc, "4314"),     ("I-210", Ngc, "4346"),
  ("II-86", Ngc, "4350"),    ("I-65", Ngc, "4361"),     ("I-30", Ngc, "4365"),     ("II-21", Ngc, "4371"),
  ("II-55", Ngc, "4394"),    ("I-77", Ngc, "4414"),     ("I-113", Ngc, "4419"),    ("II-65", Ngc, "4429"),
  ("I-28.1", Ngc, "4435"),   ("I-28.2", Ngc, "4438"),   ("II-156", Ngc, "4442"),   ("I-91", Ngc, "4448"),
  ("I-213", Ngc, "4449"),    ("II-56", Ngc, "4450"),    ("I-161", Ngc, "4459"),    ("II-114", Ngc, "4473"),
  ("II-115", Ngc, "4477"),   ("II-124", Ngc, "4478"),   ("I-197", Ngc, "4485"),    ("I-198", Ngc, "4490"),
  ("I-83", Ngc, "4494"),     ("I-31", Ngc, "4526"),     ("II-37", Ngc, "4527"),    ("II-500", Ngc, "4535"),
  ("V-2", Ngc, "4536"),      ("I-160", Ngc, "4546"),    ("I-36", Ngc, "4550"),     ("I-92", Ngc, "4559"),
  ("V-24", Ngc, "4565"),     ("I-32", Ngc, "4570"),     ("I-24", Ngc, "4596"),     ("I-178", Ngc, "4618"),
  ("V-42", Ngc, "4631"),     ("II-38", Ngc, "4636"),    ("II-94", Ngc, "4638"),    ("I-10", Ngc, "4643"),
  ("II-126", Ngc, "4654"),   ("I-176", Ngc, "4656"),    ("II-71", Ngc, "4660"),    ("I-142", Ngc, "4665"),
  ("I-15", Ngc, "4666"),     ("II-128", Ngc, "4689"),   ("I-39", Ngc, "4697"),     ("I-8", Ngc, "4698"),
  ("I-129", Ngc, "4699"),    ("I-84", Ngc, "4725"),     ("I-16", Ngc, "4753"),     ("I-25", Ngc, "4754"),
  ("II-75", Ngc, "4762"),    ("I-134", Ngc, "4781"),    ("I-211", Ngc, "4800"),    ("I-536", Ngc, "4845"),
  ("I-68", Ngc, "4856"),     ("I-162", Ngc, "4866"),    ("I-143", Ngc, "4900"),    ("I-130", Ngc, "4958"),
  ("I-42", Ngc, "4995"),     ("I-96", Ngc, "5005"),     ("I-97", Ngc, "5033"),     ("I-127", Ngc, "5054"),
  ("I-186", Ngc, "5195"),    ("I-34", Ngc, "5248"),     ("I-98", Ngc, "5273"),     ("I-256", Ngc, "5322"),
  ("I-6", Ngc, "5363"),      ("II-534", Ngc, "5364"),   ("VI-9", Ngc, "5466"),     ("I-231", Ngc, "5473"),
  ("I-214", Ngc, "5474"),    ("I-99", Ngc, "5557"),     ("I-144", Ngc, "5566"),    ("I-146", Ngc, "5576"),
  ("I-235", Ngc, "5631"),    ("I-70", Ngc, "5634"),     ("I-189", Ngc, "5676"),    ("I-188", Ngc, "5689"),
  ("II-196", Ngc, "5694"),   ("I-126", Ngc, "5746"),    ("I-128", Ngc, "5846"),    ("I-215", Ngc, "5866"),
  ("VI-19", Ngc, "5897"),    ("II-759", Ngc, "5907"),   ("II-764", Ngc, "5982"),   ("II-402", Ngc, "6118"),
  ("VI-10", Ngc, "6144"),    ("II-701", Ngc, "6207"),   ("I-280", Ngc, "6217"),    ("IV-50", Ngc, "6229"),
  ("II-584", Ngc, "6235"),   ("VI-11", Ngc, "6284"),    ("II-195", Ngc, "6287"),   ("VI-12", Ngc, "6293"),
  ("I-147", Ngc, "6304"),    ("I-45", Ngc, "6316"),     ("I-149", Ngc, "6342"),    ("I-46", Ngc, "6355"),
  ("I-48", Ngc, "6356"),     ("IV-11", Ngc, "6369"),    ("I-44", Ngc, "6401"),     ("II-587", Ngc, "6426"),
  ("I-150", Ngc, "6440"),    ("II-586", Ngc, "6445"),   ("VI-13", Ngc, "6451"),    ("II-199", Ngc, "6517"),
  ("VII-7", Ngc, "6520"),    ("I-49", Ngc, "6522"),     ("II-200", Ngc, "6528"),   ("II-198", Ngc, "6540"),
  ("IV-37", Ngc, "6543"),    ("II-197", Ngc, "6544"),   ("IV-12", Ngc, "6553"),    ("VII-30", Ngc, "6568"),
  ("II-201", Ngc, "6569"),   ("VII-31", Ngc, "6583"),   ("I-50", Ngc, "6624"),     ("II-204", Ngc, "6629"),
  ("VIII-72", Ngc, "6633"),  ("I-51", Ngc, "6638"),     ("II-205", Ngc, "6642"),   ("VI-23", Ngc, "6645"),
  ("VIII-12", Ngc, "6664"),  ("I-47", Ngc, "6712"),     ("VII-19", Ngc, "6755"),   ("VII-62", Ngc, "6756"),
  ("III-743", Ngc, "6781"),  ("VI-14", Ngc, "6802"),    ("IV-51", Ngc, "6818"),    ("VI-8", Ngc, "6819"),
  ("VII-18", Ngc, "6823"),   ("IV-73", Ngc, "6826"),    ("VII-9", Ngc, "6830"),    ("VIII-16", Ngc, "6834"),
  ("VII-59", Ngc, "6866"),   ("VIII-22", Ngc, "6882"),  ("VIII-20", Ngc, "6885"),  ("IV-16", Ngc, "6905"),
  ("VIII-56", Ngc, "6910"),  ("I-103", Ngc, "6934"),    ("VI-42", Ngc, "6939"),    ("VII-8", Ngc, "6940"),
  ("IV-76", Ngc, "6946"),    ("V-37", Ngc, "7000"),     ("I-52", Ngc, "7006"),     ("I-192", Ngc, "7008"),
  ("IV-1", Ngc, "7009"),     ("IV-74", Ngc, "7023"),    ("VI-24", Ngc, "7044"),    ("VII-51", Ngc, "7062"),
  ("VI-32", Ngc, "7086"),    ("VII-40", Ngc, "7128"),   ("VII-66", Ngc, "7142"),   ("VIII-67", Ngc, "7160"),
  ("VII-53", Ngc, "7209"),   ("II-207", Ngc, "7217"),   ("VIII-75", Ngc, "7243"),  ("VII-41", Ngc, "7296"),
  ("I-53", Ngc, "7331"),     ("VIII-77", Ngc, "7380"),  ("II-251", Ngc, "7448"),   ("I-55", Ngc, "7479"),
  ("VII-44", Ngc, "7510"),   ("I-104", Ngc, "7606"),    ("IV-18", Ngc, "7662"),    ("VIII-69", Ngc, "7686"),
  ("I-110", Ngc, "7723"),    ("I-111", Ngc, "7727"),    ("VI-30", Ngc, "7789"),    ("VII-56", Ngc, "7790"),
  ("II-240", Ngc, "7814"),
];

#[rustfmt::skip]
pub static GUM: &[XrefRow] = &[
  ("4", Ngc, "2359"), ("56", Ic, "4628"), ("64", Ngc, "6334"),
];
