use phf::{phf_map, Map};

pub(crate) static JP: Map<u16, u16> = phf_map! {
    0x0301u16 => 588, 0x0303u16 => 586, 0x0305u16 => 585, 0x0309u16 => 571, 0x030au16 => 579,
    0x030bu16 => 595, 0x030cu16 => 573, 0x030eu16 => 582, 0x0310u16 => 575, 0x0312u16 => 580,
    0x0314u16 => 589, 0x0316u16 => 591, 0x0317u16 => 564, 0x0318u16 => 569, 0x031cu16 => 576,
    0x031eu16 => 596, 0x031fu16 => 567, 0x0320u16 => 566, 0x0322u16 => 581, 0x0323u16 => 572,
    0x0325u16 => 593, 0x0326u16 => 594, 0x0327u16 => 592, 0x0329u16 => 583, 0x032au16 => 599,
    0x032du16 => 600, 0x032eu16 => 598, 0x032fu16 => 561, 0x033du16 => 568, 0x0341u16 => 578,
    0x0343u16 => 565, 0x0344u16 => 563, 0x0347u16 => 577, 0x0348u16 => 574, 0x0349u16 => 570,
    0x034au16 => 587, 0x034bu16 => 590, 0x034eu16 => 562, 0x0351u16 => 597, 0x0352u16 => 584,
    0x0f4bu16 => 559, 0x0f56u16 => 478, 0x1005u16 => 486, 0x100au16 => 480, 0x103eu16 => 527,
    0x111bu16 => 522, 0x111eu16 => 494, 0x112fu16 => 487, 0x1150u16 => 557, 0x120fu16 => 525,
    0x1237u16 => 529, 0x1335u16 => 537, 0x1337u16 => 466, 0x1403u16 => 520, 0x1423u16 => 454,
    0x1438u16 => 482, 0x1541u16 => 532, 0x1544u16 => 531, 0x162fu16 => 460, 0x1647u16 => 465,
    0x164du16 => 543, 0x170au16 => 544, 0x171cu16 => 463, 0x173du16 => 538, 0x1740u16 => 513,
    0x1744u16 => 541, 0x174bu16 => 500, 0x181au16 => 501, 0x1833u16 => 545, 0x1841u16 => 528,
    0x1850u16 => 558, 0x1902u16 => 533, 0x1917u16 => 483, 0x1926u16 => 459, 0x1a0fu16 => 547,
    0x1a12u16 => 517, 0x1a2cu16 => 534, 0x1a31u16 => 526, 0x1a33u16 => 475, 0x1a5du16 => 546,
    0x1b16u16 => 518, 0x1b21u16 => 467, 0x1b31u16 => 479, 0x1b35u16 => 495, 0x1c1cu16 => 553,
    0x1c2fu16 => 548, 0x1c48u16 => 458, 0x1c50u16 => 511, 0x1c56u16 => 515, 0x1d0du16 => 519,
    0x1d44u16 => 536, 0x1e08u16 => 496, 0x1e16u16 => 477, 0x1e2cu16 => 556, 0x1e44u16 => 506,
    0x1f0du16 => 456, 0x1f0eu16 => 455, 0x1f17u16 => 539, 0x1f1du16 => 503, 0x1f47u16 => 510,
    0x1f48u16 => 507, 0x1f4du16 => 508, 0x1f4eu16 => 461, 0x2009u16 => 471, 0x200fu16 => 540,
    0x2049u16 => 473, 0x212fu16 => 472, 0x2146u16 => 554, 0x222au16 => 504, 0x2245u16 => 550,
    0x2318u16 => 549, 0x2349u16 => 464, 0x2416u16 => 489, 0x2424u16 => 502, 0x2439u16 => 499,
    0x244bu16 => 535, 0x2510u16 => 476, 0x2528u16 => 485, 0x2541u16 => 474, 0x254du16 => 493,
    0x2552u16 => 552, 0x255bu16 => 560, 0x255du16 => 530, 0x260eu16 => 555, 0x2651u16 => 490,
    0x270bu16 => 524, 0x271du16 => 505, 0x2813u16 => 512, 0x281cu16 => 462, 0x2842u16 => 481,
    0x290bu16 => 542, 0x2918u16 => 497, 0x2925u16 => 468, 0x294bu16 => 488, 0x2a2bu16 => 514,
    0x2a3bu16 => 551, 0x2a47u16 => 491, 0x2a5bu16 => 492, 0x2b10u16 => 470, 0x2b12u16 => 457,
    0x2b1du16 => 509, 0x2b39u16 => 498, 0x2c06u16 => 484, 0x2c47u16 => 521, 0x2e01u16 => 469,
    0x2e1au16 => 523, 0x2e22u16 => 516,
};
