use phf::{phf_map, Map};

pub(crate) static KR: Map<u16, u16> = phf_map! {
    0x0f00u16 => 585, 0x0f01u16 => 545, 0x0f0fu16 => 544, 0x0f12u16 => 518, 0x0f2cu16 => 580,
    0x0f33u16 => 526, 0x0f45u16 => 536, 0x0f4cu16 => 594, 0x0f57u16 => 535, 0x0f5bu16 => 517,
    0x1017u16 => 516, 0x1018u16 => 540, 0x102cu16 => 478, 0x1036u16 => 578, 0x1041u16 => 592,
    0x1209u16 => 576, 0x121au16 => 525, 0x1229u16 => 492, 0x1241u16 => 542, 0x131fu16 => 473,
    0x1321u16 => 597, 0x132eu16 => 479, 0x1338u16 => 599, 0x134au16 => 541, 0x1354u16 => 520,
    0x1414u16 => 573, 0x141eu16 => 523, 0x1426u16 => 572, 0x142du16 => 515, 0x1448u16 => 579,
    0x144fu16 => 484, 0x1506u16 => 543, 0x1552u16 => 563, 0x1620u16 => 553, 0x162du16 => 587,
    0x162fu16 => 504, 0x1646u16 => 476, 0x1702u16 => 472, 0x1705u16 => 591, 0x170du16 => 487,
    0x1715u16 => 499, 0x1717u16 => 565, 0x171au16 => 558, 0x1748u16 => 564, 0x174cu16 => 505,
    0x1750u16 => 514, 0x180au16 => 477, 0x180du16 => 551, 0x180fu16 => 512, 0x1826u16 => 471,
    0x182bu16 => 486, 0x1838u16 => 498, 0x183du16 => 519, 0x1848u16 => 510, 0x1855u16 => 554,
    0x185cu16 => 502, 0x1917u16 => 570, 0x192du16 => 534, 0x192fu16 => 506, 0x1949u16 => 470,
    0x1950u16 => 485, 0x1a46u16 => 574, 0x1a49u16 => 530, 0x1a52u16 => 555, 0x1a5cu16 => 546,
    0x1b0cu16 => 586, 0x1b1bu16 => 556, 0x1b31u16 => 538, 0x1b55u16 => 571, 0x1c19u16 => 501,
    0x1c22u16 => 532, 0x1c23u16 => 513, 0x1c24u16 => 527, 0x1d25u16 => 560, 0x1d27u16 => 522,
    0x1d29u16 => 569, 0x1d31u16 => 567, 0x1d4du16 => 582, 0x1d4eu16 => 508, 0x1d57u16 => 568,
    0x1e00u16 => 596, 0x1e2cu16 => 575, 0x1e3bu16 => 521, 0x1e43u16 => 562, 0x1e4bu16 => 566,
    0x1e4du16 => 552, 0x1e57u16 => 507, 0x1f06u16 => 548, 0x1f0fu16 => 511, 0x1f17u16 => 588,
    0x1f19u16 => 584, 0x1f1au16 => 593, 0x1f26u16 => 598, 0x1f2bu16 => 600, 0x1f2du16 => 590,
    0x1f2eu16 => 524, 0x1f35u16 => 581, 0x1f39u16 => 537, 0x1f44u16 => 531, 0x1f59u16 => 577,
    0x1f5au16 => 561, 0x1f5bu16 => 549, 0x2003u16 => 533, 0x2005u16 => 550, 0x2035u16 => 559,
    0x203eu16 => 539, 0x204du16 => 469, 0x2055u16 => 589, 0x2156u16 => 494, 0x2214u16 => 509,
    0x223eu16 => 475, 0x2256u16 => 468, 0x2300u16 => 483, 0x230au16 => 497, 0x231eu16 => 493,
    0x2408u16 => 467, 0x240fu16 => 482, 0x2417u16 => 496, 0x242cu16 => 491, 0x250du16 => 500,
    0x251bu16 => 481, 0x2523u16 => 495, 0x253au16 => 490, 0x254cu16 => 503, 0x2620u16 => 466,
    0x2626u16 => 480, 0x262eu16 => 595, 0x262fu16 => 529, 0x2630u16 => 583, 0x2637u16 => 547,
    0x263eu16 => 557, 0x2642u16 => 489, 0x2717u16 => 528, 0x2723u16 => 474, 0x2744u16 => 465,
    0x2756u16 => 488,
};
